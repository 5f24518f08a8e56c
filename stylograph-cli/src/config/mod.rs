//! Threshold configuration files
//!
//! The TOML file mirrors [`AnalyzerConfig`] one-to-one; absent keys fall
//! back to the engine defaults, so a file may override a single threshold.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use stylograph_core::AnalyzerConfig;

use crate::error::CliError;

/// Load an analyzer configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AnalyzerConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    config
        .validate()
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

    Ok(config)
}

/// Render the default configuration as a commented TOML template
pub fn default_template() -> String {
    let body = toml::to_string_pretty(&AnalyzerConfig::default())
        .expect("default config serializes to TOML");
    format!(
        "# stylograph analyzer thresholds\n\
         #\n\
         # Every value below is a tunable heuristic threshold shown at its\n\
         # default. Remove any key to keep the default; the file may contain\n\
         # only the thresholds you want to change.\n\n{body}"
    )
}

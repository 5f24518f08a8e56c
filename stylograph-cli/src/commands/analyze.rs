//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use stylograph_core::{AnalyzerConfig, StyleAnalyzer, StyleProfile};

use crate::config;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{renderer_for, OutputFormat};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Sample files or patterns (supports glob); one sample per file
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Threshold configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the excerpt draw; fixed seeds reproduce the profile exactly
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting style analysis");
        log::debug!("Arguments: {self:?}");

        let analyzer_config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => AnalyzerConfig::default(),
        };

        let analyzer = self.build_analyzer(analyzer_config)?;
        let profile = self.run_analysis(&analyzer)?;
        self.write_profile(&profile)
    }

    fn build_analyzer(&self, analyzer_config: AnalyzerConfig) -> Result<StyleAnalyzer> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Analyzing {} sample file(s)", files.len());

        let mut analyzer = StyleAnalyzer::with_config(analyzer_config)?;
        for path in &files {
            let text = FileReader::read_text(path)?;
            if text.trim().is_empty() {
                log::warn!("Skipping empty sample: {}", path.display());
                continue;
            }
            log::debug!("Adding sample {} ({} bytes)", path.display(), text.len());
            analyzer.add_sample(text);
        }
        Ok(analyzer)
    }

    fn run_analysis(&self, analyzer: &StyleAnalyzer) -> Result<StyleProfile> {
        let profile = match self.seed {
            Some(seed) => analyzer.analyze_seeded(seed),
            None => analyzer.analyze(),
        }
        .map_err(|e| CliError::AnalysisError(e.to_string()))?;

        log::info!(
            "Profile ready: {} excerpt(s), {} quirk(s)",
            profile.excerpts.len(),
            profile.distinctive_patterns.quirks.len()
        );
        Ok(profile)
    }

    fn write_profile(&self, profile: &StyleProfile) -> Result<()> {
        let renderer = renderer_for(self.format);
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                renderer.render(profile, &mut file)?;
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                renderer.render(profile, &mut handle)?;
                handle.flush()?;
            }
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

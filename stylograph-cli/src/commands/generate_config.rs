//! Generate-config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = config::default_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Threshold template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust any threshold");
        println!("2. Use it for analysis:");
        println!(
            "   stylograph analyze -i samples/*.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

//! Command-line entry point for stylograph

use clap::Parser;
use stylograph_cli::commands::Commands;

/// Writing-style profiling from text samples
#[derive(Debug, Parser)]
#[command(name = "stylograph", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

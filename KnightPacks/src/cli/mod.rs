//! KnightPacks CLI - Command-line interface for compendium generation

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knightpacks")]
#[command(
    version,
    about = "KnightPacks: Knight API content to Foundry VTT compendium packs",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./knightpacks.toml when present)
    #[arg(short, long, global = true, env = "KNIGHTPACKS_CONFIG")]
    config: Option<PathBuf>,

    /// Log per-item and cache activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the KnightPacks CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG wins unless --verbose is given
    let filter = if cli.verbose {
        EnvFilter::new("knightpacks=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute(cli.config.as_deref())?;

    Ok(())
}

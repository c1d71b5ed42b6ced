use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::compendium::EntityKind;
use crate::config::FailurePolicy;

pub mod cache;
pub mod generate;
pub mod kinds;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate compendium packs
    Generate {
        /// Entity types to generate, by name or plural (e.g. armour, weapons)
        #[arg(value_name = "KIND", required_unless_present = "all")]
        kinds: Vec<EntityKind>,

        /// Generate every entity type
        #[arg(long, conflicts_with = "kinds")]
        all: bool,

        /// Content API base URL
        #[arg(long, env = "KNIGHTPACKS_API_URL")]
        api_url: Option<String>,

        /// Bearer token sent to the content API
        #[arg(long, env = "KNIGHTPACKS_API_TOKEN", hide_env_values = true)]
        api_token: Option<String>,

        /// Directory holding templates and lookup tables
        #[arg(long, env = "KNIGHTPACKS_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Directory holding pre-placed asset images
        #[arg(long, env = "KNIGHTPACKS_FILES_DIR")]
        files_dir: Option<PathBuf>,

        /// Output directory for the .db files
        #[arg(short, long, env = "KNIGHTPACKS_PACKS_DIR")]
        output: Option<PathBuf>,

        /// What to do when a type fails (report, abort)
        #[arg(long, env = "KNIGHTPACKS_FAILURE_POLICY")]
        failure_policy: Option<FailurePolicy>,

        /// Bypass the response cache
        #[arg(long)]
        no_cache: bool,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List entity types with their endpoints and output files
    Kinds,

    /// Response cache operations
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Delete every cached API response
    Clear,

    /// Show the cache location and entry count
    Info,
}

impl Commands {
    pub fn execute(&self, config: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Commands::Generate {
                kinds,
                all,
                api_url,
                api_token,
                data_dir,
                files_dir,
                output,
                failure_policy,
                no_cache,
                quiet,
            } => {
                let kinds = if *all { EntityKind::ALL.to_vec() } else { kinds.clone() };
                generate::execute(
                    config,
                    &kinds,
                    &generate::Overrides {
                        api_url: api_url.clone(),
                        api_token: api_token.clone(),
                        data_dir: data_dir.clone(),
                        files_dir: files_dir.clone(),
                        packs_dir: output.clone(),
                        failure_policy: *failure_policy,
                    },
                    !*no_cache,
                    !*quiet,
                )
            }
            Commands::Kinds => kinds::execute(),
            Commands::Cache { command } => match command {
                CacheCommands::Clear => cache::clear(config),
                CacheCommands::Info => cache::info(config),
            },
        }
    }
}

//! # KnightPacks
//!
//! Turns the content of the Knight role-playing game API into Foundry VTT
//! compendium packs.
//!
//! Each entity type (armours, weapons, modules, overdrives, arcana,
//! traumas...) is listed from the API, every item is fetched in detail,
//! mapped onto the Foundry system's template for that type and written as
//! one JSON document per line into `<plural>-<pack>.db` files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use knightpacks::prelude::*;
//!
//! let config = Config::discover(None)?;
//! let source = CachedSource::new(
//!     ApiClient::from_config(&config)?,
//!     ResponseCache::new(&config.cache_dir, config.cache_ttl()),
//! );
//! let ctx = BuildContext::from_config(&config);
//! let mut generator = Generator::new(source, ctx, &config.packs_dir);
//!
//! let report = generator.generate(EntityKind::Weapon)?;
//! println!("{} records in {} files", report.records, report.files.len());
//! # Ok::<(), knightpacks::Error>(())
//! ```
//!
//! ### Building a single record
//!
//! Builders work on a detail document already in hand:
//!
//! ```no_run
//! use knightpacks::prelude::*;
//! use serde_json::json;
//!
//! let mut ctx = BuildContext::from_config(&Config::default());
//! let detail = json!({"id": 12, "name": "Régénération", "description": "Regagne 10 PS."});
//! let built = builder_for(EntityKind::NpcCapacity).build(&mut ctx, &detail)?;
//! println!("{}", built[0].record.to_line()?);
//! # Ok::<(), knightpacks::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `knightpacks` command-line binary

pub mod api;
pub mod assets;
pub mod builders;
pub mod compendium;
pub mod config;
pub mod error;
pub mod ident;
pub mod markup;
pub mod record;
pub mod template;
pub mod vocabulary;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::api::{ApiClient, CachedSource, ContentSource, MemorySource, ResponseCache};
    pub use crate::builders::{Built, RecordBuilder, builder_for};
    pub use crate::compendium::{
        BuildContext, EntityKind, Generator, RunPhase, RunProgress, RunSummary, TypeReport,
    };
    pub use crate::config::{Config, FailurePolicy};
    pub use crate::ident::generate_id;
    pub use crate::record::Record;
    pub use crate::template::TemplateLoader;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "cli")]
pub mod cli;

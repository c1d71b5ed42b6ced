//! Compendium generation: entity types, run context, driver and output

mod context;
mod kind;
mod runner;
mod writer;

pub use context::BuildContext;
pub use kind::EntityKind;
pub use runner::{
    Generator, RunPhase, RunProgress, RunProgressCallback, RunSummary, TypeFailure, TypeReport,
};
pub use writer::{PackLines, write_packs};

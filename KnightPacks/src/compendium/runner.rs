//! Run driver
//!
//! One entity type at a time: list, fetch each detail, build, normalize,
//! serialize, then write every pack of the type. Nothing is written for a
//! type whose run fails.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde_json::Value;

use super::{BuildContext, EntityKind, PackLines, write_packs};
use crate::api::ContentSource;
use crate::builders::{self, fields};
use crate::config::FailurePolicy;
use crate::error::{Error, Result};

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for generation runs
pub type RunProgressCallback<'a> = &'a dyn Fn(&RunProgress);

/// Current phase of a type's run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Fetching the item list
    Listing,
    /// Fetching and building one item
    Building,
    /// Writing the pack files
    Writing,
}

/// Progress information during a generation run
#[derive(Debug, Clone)]
pub struct RunProgress {
    pub kind: EntityKind,
    pub phase: RunPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Name or id of the item being processed (if applicable)
    pub current_item: Option<String>,
}

impl RunProgress {
    #[must_use]
    pub fn new(kind: EntityKind, phase: RunPhase, current: usize, total: usize) -> Self {
        Self {
            kind,
            phase,
            current,
            total,
            current_item: None,
        }
    }

    #[must_use]
    pub fn with_item(
        kind: EntityKind,
        phase: RunPhase,
        current: usize,
        total: usize,
        item: impl Into<String>,
    ) -> Self {
        Self {
            current_item: Some(item.into()),
            ..Self::new(kind, phase, current, total)
        }
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Outcome of one successful type run.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReport {
    pub kind: EntityKind,
    /// Source items listed by the API
    pub items: usize,
    /// Records written, across all packs
    pub records: usize,
    pub files: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// A type whose run failed.
#[derive(Debug)]
pub struct TypeFailure {
    pub kind: EntityKind,
    pub error: Error,
}

/// Outcome of a multi-type run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub completed: Vec<TypeReport>,
    pub failed: Vec<TypeFailure>,
    /// Types not attempted because an earlier failure stopped the run
    pub skipped: Vec<EntityKind>,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> usize {
        self.completed.iter().map(|report| report.records).sum()
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Drives builders against a content source and writes the packs.
#[derive(Debug)]
pub struct Generator<S> {
    source: S,
    ctx: BuildContext,
    packs_dir: PathBuf,
    policy: FailurePolicy,
}

impl<S: ContentSource> Generator<S> {
    pub fn new(source: S, ctx: BuildContext, packs_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            ctx,
            packs_dir: packs_dir.into(),
            policy: FailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn packs_dir(&self) -> &Path {
        &self.packs_dir
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Build and write every pack of `kind`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while listing, fetching, building or
    /// writing; no file is written unless every item built.
    pub fn generate(&mut self, kind: EntityKind) -> Result<TypeReport> {
        self.generate_with_progress(kind, &|_| {})
    }

    /// Same as [`Self::generate`], reporting progress.
    ///
    /// # Errors
    ///
    /// See [`Self::generate`].
    pub fn generate_with_progress(
        &mut self,
        kind: EntityKind,
        progress: RunProgressCallback,
    ) -> Result<TypeReport> {
        let start = Instant::now();
        tracing::info!("Generating {} compendium", kind);

        let (items, packs) = self.collect(kind, progress)?;
        let records = packs.values().map(Vec::len).sum();

        progress(&RunProgress::new(kind, RunPhase::Writing, packs.len(), packs.len()));
        let files = write_packs(&self.packs_dir, kind, &packs)?;

        Ok(TypeReport {
            kind,
            items,
            records,
            files,
            elapsed: start.elapsed(),
        })
    }

    /// Run each type in order under the configured failure policy.
    ///
    /// Failures are logged at the run boundary. With
    /// [`FailurePolicy::Report`] the next type is attempted; with
    /// [`FailurePolicy::Abort`] the remaining types are skipped.
    pub fn run(&mut self, kinds: &[EntityKind], progress: RunProgressCallback) -> RunSummary {
        let mut summary = RunSummary::default();

        for (index, &kind) in kinds.iter().enumerate() {
            match self.generate_with_progress(kind, progress) {
                Ok(report) => summary.completed.push(report),
                Err(error) => {
                    tracing::error!("Failed to generate {} compendium: {}", kind, error);
                    summary.failed.push(TypeFailure { kind, error });
                    if self.policy == FailurePolicy::Abort {
                        summary.skipped.extend_from_slice(&kinds[index + 1..]);
                        break;
                    }
                }
            }
        }

        summary
    }

    /// Serialized lines of every record of `kind`, grouped by pack.
    fn collect(
        &mut self,
        kind: EntityKind,
        progress: RunProgressCallback,
    ) -> Result<(usize, PackLines)> {
        self.ctx.prepare_assets(kind)?;
        let mut builder = builders::builder_for(kind);
        builder.prepare(&mut self.ctx)?;

        progress(&RunProgress::new(kind, RunPhase::Listing, 0, 0));
        let endpoint = kind.endpoint();
        let summaries = match self.source.get(endpoint)? {
            Value::Array(summaries) => summaries,
            _ => {
                return Err(Error::Transport {
                    path: endpoint.to_string(),
                    message: "expected a JSON array".to_string(),
                });
            }
        };

        let total = summaries.len();
        let mut packs = PackLines::new();
        for (index, summary) in summaries.iter().enumerate() {
            let id = fields::item_id(summary)?;
            progress(&RunProgress::with_item(
                kind,
                RunPhase::Building,
                index + 1,
                total,
                id.as_str(),
            ));

            let detail = self.source.get(&format!("{endpoint}/{id}"))?;
            for built in builder.build(&mut self.ctx, &detail)? {
                let mut record = built.record;
                record.normalize(builder.empty_object_paths());
                tracing::debug!("Built {} {:?} into pack {}", kind, record.name(), built.pack);
                packs.entry(built.pack).or_default().push(record.to_line()?);
            }
        }

        Ok((total, packs))
    }
}

//! CLI command for generating compendium packs

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::time::Instant;

use console::style;
use indicatif::ProgressBar;

use crate::api::{ApiClient, CachedSource, ContentSource, ResponseCache};
use crate::cli::progress::{CROSS, DISK, PACKAGE, print_done, print_step, simple_bar};
use crate::compendium::{BuildContext, EntityKind, Generator, RunPhase, RunProgress, RunSummary};
use crate::config::{Config, FailurePolicy};

/// Command-line values taking precedence over the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub files_dir: Option<PathBuf>,
    pub packs_dir: Option<PathBuf>,
    pub failure_policy: Option<FailurePolicy>,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_base_url.clone_from(url);
        }
        if let Some(token) = &self.api_token {
            config.api_token = Some(token.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(dir) = &self.files_dir {
            config.files_dir.clone_from(dir);
        }
        if let Some(dir) = &self.packs_dir {
            config.packs_dir.clone_from(dir);
        }
        if let Some(policy) = self.failure_policy {
            config.failure_policy = policy;
        }
    }
}

pub fn execute(
    config_path: Option<&Path>,
    kinds: &[EntityKind],
    overrides: &Overrides,
    use_cache: bool,
    show_progress: bool,
) -> anyhow::Result<()> {
    let mut config = Config::discover(config_path)?;
    overrides.apply(&mut config);
    config.validate()?;

    let client = ApiClient::from_config(&config)?;
    let source: Box<dyn ContentSource> = if use_cache {
        Box::new(CachedSource::new(
            client,
            ResponseCache::new(&config.cache_dir, config.cache_ttl()),
        ))
    } else {
        Box::new(client)
    };

    let ctx = BuildContext::from_config(&config);
    let mut generator =
        Generator::new(source, ctx, &config.packs_dir).with_policy(config.failure_policy);

    let start = Instant::now();
    let summary = if show_progress {
        run_with_progress(&mut generator, kinds)
    } else {
        generator.run(kinds, &|_| {})
    };

    print_summary(&summary);
    if show_progress {
        print_done(start.elapsed());
    }

    if !summary.is_success() && config.failure_policy == FailurePolicy::Abort {
        let failed: Vec<&str> = summary.failed.iter().map(|f| f.kind.name()).collect();
        anyhow::bail!("Generation aborted: {} failed", failed.join(", "));
    }

    Ok(())
}

fn run_with_progress<S: ContentSource>(
    generator: &mut Generator<S>,
    kinds: &[EntityKind],
) -> RunSummary {
    let step = Cell::new(0);
    let bar: RefCell<Option<ProgressBar>> = RefCell::new(None);

    let on_progress = |progress: &RunProgress| match progress.phase {
        RunPhase::Listing => {
            // A bar left over from a failed type
            if let Some(pb) = bar.borrow_mut().take() {
                pb.abandon();
            }
            step.set(step.get() + 1);
            print_step(
                step.get(),
                kinds.len(),
                PACKAGE,
                &format!("Generating {}...", progress.kind.plural()),
            );
        }
        RunPhase::Building => {
            let mut slot = bar.borrow_mut();
            let pb = slot.get_or_insert_with(|| {
                simple_bar(progress.total as u64, progress.kind.plural())
            });
            pb.set_position(progress.current as u64);
        }
        RunPhase::Writing => {
            if let Some(pb) = bar.borrow_mut().take() {
                pb.finish_with_message("done");
            }
        }
    };

    let summary = generator.run(kinds, &on_progress);
    if let Some(pb) = bar.into_inner() {
        pb.abandon();
    }
    summary
}

fn print_summary(summary: &RunSummary) {
    for report in &summary.completed {
        for file in &report.files {
            println!("{}{}", DISK, file.display());
        }
        println!(
            "  {} {} records from {} items",
            style(report.kind.plural()).bold(),
            report.records,
            report.items
        );
    }
    for failure in &summary.failed {
        eprintln!(
            "{}{} {}",
            CROSS,
            style(failure.kind.plural()).red().bold(),
            failure.error
        );
    }
    if !summary.skipped.is_empty() {
        let skipped: Vec<&str> = summary.skipped.iter().map(|kind| kind.name()).collect();
        eprintln!("Skipped: {}", skipped.join(", "));
    }
    println!(
        "{} records written, {} types failed",
        summary.records(),
        summary.failed.len()
    );
}

//! CLI commands for the response cache

use std::path::Path;

use crate::api::ResponseCache;
use crate::cli::progress::BROOM;
use crate::config::Config;

fn open(config: Option<&Path>) -> anyhow::Result<ResponseCache> {
    let config = Config::discover(config)?;
    Ok(ResponseCache::new(&config.cache_dir, config.cache_ttl()))
}

pub fn clear(config: Option<&Path>) -> anyhow::Result<()> {
    let cache = open(config)?;
    let removed = cache.clear()?;
    println!("{}Removed {} cached responses from {}", BROOM, removed, cache.dir().display());
    Ok(())
}

pub fn info(config: Option<&Path>) -> anyhow::Result<()> {
    let cache = open(config)?;
    println!("Cache directory: {}", cache.dir().display());
    println!("Entries: {}", cache.entry_count()?);
    Ok(())
}

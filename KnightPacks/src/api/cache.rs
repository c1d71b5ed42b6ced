//! On-disk response cache
//!
//! One JSON file per API path, named after the URL-safe base64 of the path.
//! Each file carries its own expiry so the TTL in force when a response was
//! stored is the one honored.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ContentSource;
use crate::error::{Error, Result};

/// Stored form of a cached response.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    path: String,
    expires_at: DateTime<Utc>,
    body: Value,
}

/// Cache statistics for debugging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub expired: usize,
}

/// Response cache rooted at a directory.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
    ttl: TimeDelta,
    stats: CacheStats,
}

impl ResponseCache {
    /// Create a cache in `dir` keeping entries for `ttl`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// File backing `path`.
    #[must_use]
    pub fn entry_path(&self, path: &str) -> PathBuf {
        self.dir
            .join(format!("{}.json", URL_SAFE_NO_PAD.encode(path.as_bytes())))
    }

    /// Fresh cached body for `path`.
    pub fn get(&mut self, path: &str) -> Option<Value> {
        self.get_at(path, Utc::now())
    }

    /// Cached body for `path` as seen at `now`.
    ///
    /// Unreadable or corrupted entries count as misses.
    pub fn get_at(&mut self, path: &str, now: DateTime<Utc>) -> Option<Value> {
        let file = self.entry_path(path);
        let entry = fs::read_to_string(&file)
            .ok()
            .and_then(|content| match serde_json::from_str::<CacheEntry>(&content) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Ignoring corrupted cache entry {}: {}", file.display(), e);
                    None
                }
            });

        match entry {
            Some(entry) if entry.expires_at > now => {
                self.stats.hits += 1;
                tracing::debug!("Cache hit: {}", path);
                Some(entry.body)
            }
            Some(_) => {
                self.stats.expired += 1;
                tracing::debug!("Cache expired: {}", path);
                None
            }
            None => {
                self.stats.misses += 1;
                tracing::debug!("Cache miss: {}", path);
                None
            }
        }
    }

    /// Store `body` for `path`.
    pub fn put(&self, path: &str, body: &Value) -> Result<()> {
        self.put_at(path, body, Utc::now())
    }

    /// Store `body` for `path` as of `now`.
    pub fn put_at(&self, path: &str, body: &Value, now: DateTime<Utc>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let entry = CacheEntry {
            path: path.to_string(),
            expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
            body: body.clone(),
        };
        let file = self.entry_path(path);
        fs::write(&file, serde_json::to_vec(&entry)?)
            .map_err(|source| Error::Write { path: file, source })
    }

    /// Paths of every stored entry file.
    fn entry_files(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Number of stored entries, expired ones included.
    pub fn entry_count(&self) -> Result<usize> {
        Ok(self.entry_files()?.len())
    }

    /// Delete every cached response; returns the number of entries removed.
    pub fn clear(&self) -> Result<usize> {
        let files = self.entry_files()?;
        for path in &files {
            fs::remove_file(path)?;
        }
        let removed = files.len();
        tracing::info!("Removed {} cached responses from {}", removed, self.dir.display());
        Ok(removed)
    }
}

/// A content source with a response cache in front of it.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: ResponseCache,
}

impl<S: ContentSource> CachedSource<S> {
    pub fn new(inner: S, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }

    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ContentSource> ContentSource for CachedSource<S> {
    fn get(&mut self, path: &str) -> Result<Value> {
        if let Some(body) = self.cache.get(path) {
            return Ok(body);
        }

        let body = self.inner.get(path)?;
        if let Err(e) = self.cache.put(path, &body) {
            tracing::warn!("Failed to cache {}: {}", path, e);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemorySource;
    use serde_json::json;

    const SIX_HOURS: Duration = Duration::from_secs(6 * 3600);

    #[test]
    fn test_entry_path_is_url_safe_base64() {
        let cache = ResponseCache::new("/tmp/c", SIX_HOURS);
        assert_eq!(cache.entry_path("weapon/12"), PathBuf::from("/tmp/c/d2VhcG9uLzEy.json"));
        let name = cache.entry_path("a/b?c>d").file_name().unwrap().to_string_lossy().into_owned();
        assert!(!name.contains('/') && !name.contains('+'));
    }

    #[test]
    fn test_fresh_entry_served_expired_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ResponseCache::new(dir.path(), SIX_HOURS);
        let stored_at = Utc::now();
        cache.put_at("armour", &json!([{"id": 1}]), stored_at).unwrap();

        let fresh = stored_at + TimeDelta::hours(5);
        assert_eq!(cache.get_at("armour", fresh), Some(json!([{"id": 1}])));

        let stale = stored_at + TimeDelta::hours(7);
        assert_eq!(cache.get_at("armour", stale), None);

        assert_eq!(cache.get_at("module", fresh), None);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, expired: 1 });
    }

    #[test]
    fn test_corrupted_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ResponseCache::new(dir.path(), SIX_HOURS);
        fs::write(cache.entry_path("arcana"), "garbage").unwrap();
        assert_eq!(cache.get("arcana"), None);
    }

    #[test]
    fn test_cached_source_skips_transport_on_hit() {
        let dir = tempfile::tempdir().unwrap();
        let inner = MemorySource::new().with("trauma-category", json!([{"id": 4}]));
        let mut source = CachedSource::new(inner, ResponseCache::new(dir.path(), SIX_HOURS));

        assert_eq!(source.get("trauma-category").unwrap(), json!([{"id": 4}]));
        assert_eq!(source.get("trauma-category").unwrap(), json!([{"id": 4}]));
        assert_eq!(source.cache().stats().hits, 1);
        assert_eq!(source.into_inner().requests(), ["trauma-category"]);
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResponseCache::new(dir.path(), SIX_HOURS);
        cache.put("a", &json!(1)).unwrap();
        cache.put("b", &json!(2)).unwrap();
        assert_eq!(cache.entry_count().unwrap(), 2);
        assert_eq!(cache.clear().unwrap(), 2);
        assert_eq!(cache.entry_count().unwrap(), 0);
        assert_eq!(cache.clear().unwrap(), 0);
    }
}

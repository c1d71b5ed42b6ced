//! Content API access
//!
//! The generator only needs `get(path) -> JSON`. [`ApiClient`] performs the
//! HTTP request, [`CachedSource`] puts the on-disk [`ResponseCache`] in front
//! of any source, and [`MemorySource`] serves canned documents.

mod cache;
mod client;
mod memory;

use serde_json::Value;

use crate::error::Result;

pub use cache::{CachedSource, ResponseCache};
pub use client::ApiClient;
pub use memory::MemorySource;

/// Anything that resolves an API path to a JSON document.
pub trait ContentSource {
    /// Fetch the document at `path` (e.g. `"weapon"` or `"weapon/12"`).
    fn get(&mut self, path: &str) -> Result<Value>;
}

impl<S: ContentSource + ?Sized> ContentSource for &mut S {
    fn get(&mut self, path: &str) -> Result<Value> {
        (**self).get(path)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    fn get(&mut self, path: &str) -> Result<Value> {
        (**self).get(path)
    }
}

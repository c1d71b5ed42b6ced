//! In-memory content source

use std::collections::HashMap;

use serde_json::Value;

use super::ContentSource;
use crate::error::{Error, Result};

/// Serves pre-registered documents; unknown paths are transport errors.
///
/// Used by tests and for replaying saved API dumps.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
    /// Every path requested, in order
    requests: Vec<String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the document served at `path`.
    pub fn insert(&mut self, path: impl Into<String>, document: Value) {
        self.documents.insert(path.into(), document);
    }

    /// Builder form of [`MemorySource::insert`].
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, document: Value) -> Self {
        self.insert(path, document);
        self
    }

    /// Paths requested so far.
    #[must_use]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl ContentSource for MemorySource {
    fn get(&mut self, path: &str) -> Result<Value> {
        self.requests.push(path.to_string());
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Transport {
                path: path.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            })
    }
}

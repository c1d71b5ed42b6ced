//! Template skeletons and auxiliary data tables
//!
//! Every entity type has a JSON skeleton under the data directory holding
//! the default value of every field a record must carry. Files are parsed
//! once per run; callers always receive an independent deep copy.

mod merge;
mod normalize;
pub mod path;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::compendium::EntityKind;
use crate::error::{Error, Result};
use crate::record::Record;

pub use merge::{merge, merge_into};
pub use normalize::normalize;

/// File name of the reusable custom effect sub-template.
pub const CUSTOM_EFFECT_TEMPLATE: &str = "custom_effect_tpl.json";

/// Loads and memoizes JSON files from the data directory.
#[derive(Debug)]
pub struct TemplateLoader {
    data_dir: PathBuf,
    /// Parsed documents keyed by file name
    parsed: HashMap<String, Value>,
}

impl TemplateLoader {
    /// Create a loader reading from `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            parsed: HashMap::new(),
        }
    }

    /// Directory the loader reads from.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Register a document directly, bypassing the filesystem (for testing)
    pub fn insert(&mut self, file_name: impl Into<String>, document: Value) {
        self.parsed.insert(file_name.into(), document);
    }

    /// Fresh copy of the skeleton for `kind`.
    ///
    /// # Errors
    /// [`Error::MalformedTemplate`] when the file is missing, invalid JSON, or
    /// not a JSON object.
    pub fn load_template(&mut self, kind: EntityKind) -> Result<Record> {
        let file_name = kind.template_file();
        let document = self.load_object(file_name)?;
        Ok(Record::from_template(Value::Object(document)))
    }

    /// Fresh copy of the custom effect sub-template.
    ///
    /// # Errors
    /// [`Error::MalformedTemplate`] when the file is missing or not an object.
    pub fn load_custom_effect_template(&mut self) -> Result<Map<String, Value>> {
        self.load_object(CUSTOM_EFFECT_TEMPLATE)
    }

    /// Fresh copy of an auxiliary data table (ability lists, module tables...).
    ///
    /// # Errors
    /// [`Error::MalformedTemplate`] when the file is missing or not an object.
    pub fn load_data(&mut self, file_name: &str) -> Result<Map<String, Value>> {
        self.load_object(file_name)
    }

    fn load_object(&mut self, file_name: &str) -> Result<Map<String, Value>> {
        let path = self.data_dir.join(file_name);
        match self.parsed(file_name)? {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(Error::MalformedTemplate {
                path,
                message: "top-level value is not a JSON object".to_string(),
            }),
        }
    }

    fn parsed(&mut self, file_name: &str) -> Result<&Value> {
        if !self.parsed.contains_key(file_name) {
            let document = self.read(file_name)?;
            tracing::debug!("Loaded template {}", file_name);
            self.parsed.insert(file_name.to_string(), document);
        }

        self.parsed
            .get(file_name)
            .ok_or_else(|| Error::MalformedTemplate {
                path: self.data_dir.join(file_name),
                message: "template vanished from cache".to_string(),
            })
    }

    fn read(&self, file_name: &str) -> Result<Value> {
        let path = self.data_dir.join(file_name);
        let content = fs::read_to_string(&path).map_err(|e| Error::MalformedTemplate {
            path: path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| Error::MalformedTemplate {
            path,
            message: e.to_string(),
        })
    }
}

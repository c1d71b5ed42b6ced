//! Error types for `KnightPacks`

use std::path::PathBuf;

use thiserror::Error;

use crate::vocabulary::VocabularyField;

/// The error type for `KnightPacks` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Vocabulary Errors ====================
    /// A vendor term has no entry in its translation table.
    ///
    /// Always fatal: an unmapped rule-book term means the table is stale.
    #[error("unmapped {field} value: {value}")]
    UnmappedVocabulary {
        /// The table the value was looked up in.
        field: VocabularyField,
        /// The offending vendor value (`null` when absent).
        value: String,
    },

    /// A free-text label could not be matched against its lookup table.
    #[error("unresolved {table} reference: \"{label}\"")]
    UnresolvedReference {
        /// Name of the lookup table (abilities, specials, modules, ...).
        table: &'static str,
        /// The label that could not be resolved.
        label: String,
    },

    // ==================== Template Errors ====================
    /// A template or auxiliary data file is missing, unreadable or invalid.
    #[error("malformed template {path}: {message}")]
    MalformedTemplate {
        /// Path of the backing file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// An override tried to replace a template mapping with a non-mapping value.
    #[error("override would replace template object at {path}")]
    TemplateConflict {
        /// Dotted path of the conflicting key.
        path: String,
    },

    // ==================== Source Data Errors ====================
    /// A detail record lacks a field, or the field has an unexpected JSON type.
    #[error("missing or invalid source field: {path}")]
    MissingField {
        /// Dotted path of the field inside the detail record.
        path: String,
    },

    // ==================== Transport Errors ====================
    /// The content API could not be reached or answered with garbage.
    #[error("request for \"{path}\" failed: {message}")]
    Transport {
        /// The API path that was requested.
        path: String,
        /// Status line, decoding error or connection error.
        message: String,
    },

    // ==================== Output Errors ====================
    /// Writing a compendium file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The compendium file being written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Configuration Errors ====================
    /// Invalid configuration value or unreadable configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl Error {
    /// Shorthand for an [`Error::UnmappedVocabulary`] on an optional vendor value.
    pub(crate) fn unmapped(field: VocabularyField, value: Option<&str>) -> Self {
        Error::UnmappedVocabulary {
            field,
            value: value.unwrap_or("null").to_string(),
        }
    }

    /// Shorthand for an [`Error::MissingField`].
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Error::MissingField { path: path.into() }
    }
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

// Add conversion from toml::de::Error
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// A specialized Result type for `KnightPacks` operations.
pub type Result<T> = std::result::Result<T, Error>;

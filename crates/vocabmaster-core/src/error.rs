//! Core error types for vocabmaster-core.
//!
//! The leveling engine and timer accountant are total over well-formed state
//! and raise nothing; errors come from lookups, input validation, and the
//! persistence boundary.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vocabmaster-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Operation referenced an id absent from the collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: ItemKind, id: u64 },

    /// Input rejected before any engine invocation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence failure. The in-memory result of the operation that
    /// triggered the write is still valid; only durability is in question.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which collection an id lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Word,
    Sentence,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Word => f.write_str("word"),
            ItemKind::Sentence => f.write_str("sentence"),
        }
    }
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to load database from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save database to {}: {message}", path.display())]
    SaveFailed { path: PathBuf, message: String },

    #[error("Failed to load configuration from {}: {message}", path.display())]
    ConfigLoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {}: {message}", path.display())]
    ConfigSaveFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

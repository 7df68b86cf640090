//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for template materialization"
//! @acp:domain cli
//! @acp:layer model
//!
//! Every materialization failure carries the offending path and the
//! underlying cause. Nothing here is retried by the library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the droid library
#[derive(Debug, Error)]
pub enum DroidError {
    /// A template entry path failed a structural check
    #[error("Invalid template path '{path}': {reason}")]
    InvalidTemplatePath { path: String, reason: String },

    /// The filesystem refused to create a directory
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template entry could not be read from its store
    #[error("Failed to read template entry '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A destination file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two template entries mapped onto the same destination
    #[error("Template entries '{first}' and '{second}' both map to '{path}'")]
    DuplicateDestination {
        path: String,
        first: String,
        second: String,
    },

    /// A placeholder value would break single-pass substitution
    #[error("Invalid value for placeholder {token}: {reason}")]
    InvalidPlaceholder { token: String, reason: String },

    /// Render configuration rejected at the input boundary
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Answers file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Plain I/O outside of a materialization walk
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for droid operations
pub type Result<T> = std::result::Result<T, DroidError>;

//! Error types for workbook patching
//!
//! Provides the per-stage taxonomy:
//! - Load operations (file → document): read and syntax failures
//! - Save operations (document → file): write and serialization failures
//!
//! Unexpected node shapes encountered while navigating the document are not
//! errors: the patch operations treat missing or ill-typed nested structure
//! as "nothing to update" and skip it.

use std::path::PathBuf;

/// Errors while loading the workbook document (ingress)
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in the source file
    #[error("syntax error in {path}: {message}")]
    Syntax { path: PathBuf, message: String },
}

impl LoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors while writing the workbook document back (egress)
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization logic failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl SaveError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined workbook patching error
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("save error: {0}")]
    Save(#[from] SaveError),
}

/// Result type alias for workbook operations
pub type WorkbookResult<T> = Result<T, WorkbookError>;

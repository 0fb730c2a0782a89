//! Error types for scene loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing a scene config
#[derive(Error, Debug)]
pub enum SceneError {
    /// The config source could not be opened or read
    #[error("could not read config '{}': {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A recognized record with fewer fields than its keyword requires
    #[error("line {line}: {keyword} record needs {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        keyword: &'static str,
        expected: usize,
        found: usize,
    },

    /// A field that is present but holds an unusable value
    #[error("line {line}: invalid {field} '{value}': {reason}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl SceneError {
    /// Line number (1-based) the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            SceneError::ConfigUnreadable { .. } => None,
            SceneError::MalformedRecord { line, .. } | SceneError::InvalidField { line, .. } => {
                Some(*line)
            }
        }
    }
}

/// Scene loading result type
pub type Result<T> = std::result::Result<T, SceneError>;

//! Model error types

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while loading or resolving talent data.
///
/// None of these are recoverable: the input tables are static, so the run
/// aborts on the first one.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A talent reference does not resolve in the talent index
    #[error("Missing reference: talent {id} referenced by {referenced_by} does not exist")]
    MissingReference {
        /// Unresolved talent identifier
        id: Uuid,
        /// Human-readable owner of the dangling reference
        referenced_by: String,
    },

    /// A row could not be parsed into the expected shape
    #[error("Malformed record in {} (line {line}): {message}", file.display())]
    MalformedRecord {
        /// Source table
        file: PathBuf,
        /// 1-based line number in the source table, 0 when unknown
        line: u64,
        /// What went wrong
        message: String,
    },

    /// The input table could not be read
    #[error("I/O error reading {}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Create a missing-reference error
    pub fn missing_reference(id: Uuid, referenced_by: impl Into<String>) -> Self {
        ModelError::MissingReference {
            id,
            referenced_by: referenced_by.into(),
        }
    }

    /// Create a malformed-record error
    pub fn malformed(file: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        ModelError::MalformedRecord {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

// Error Handling
//
// *La Gestion des Erreurs* (The Error Management) - Run-level error types

use lechemin::PathError;
use lemodele::ModelError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for TreeHopper runs
pub type Result<T> = std::result::Result<T, TreeHopperError>;

/// TreeHopper error types.
///
/// Every variant is fatal: the inputs are static, so a retry would fail the
/// same way.
#[derive(Debug, Error)]
pub enum TreeHopperError {
    /// Input tables could not be read or parsed, or a reference dangles
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Talent trees could not be built
    #[error(transparent)]
    Path(#[from] PathError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
        /// How to fix it
        suggestion: Option<String>,
    },

    /// I/O errors with context
    #[error("I/O error: {context} (path: {path:?})")]
    Io {
        /// Operation being performed
        context: String,
        /// Path involved, if any
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The run was interrupted between phases
    #[error("Run cancelled before {phase}")]
    Cancelled {
        /// Phase that did not start
        phase: &'static str,
    },
}

impl TreeHopperError {
    /// Create a config error
    pub fn config_error(message: impl Into<String>, suggestion: Option<String>) -> Self {
        TreeHopperError::Config {
            message: message.into(),
            suggestion,
        }
    }

    /// Create an I/O error with context
    pub fn io_error(
        context: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        TreeHopperError::Io {
            context: context.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// True if the run was interrupted rather than failed
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TreeHopperError::Cancelled { .. })
    }

    /// Get user-friendly suggestion for recovery
    pub fn suggestion(&self) -> Option<String> {
        match self {
            TreeHopperError::Config { suggestion, .. } => suggestion.clone(),
            TreeHopperError::Model(ModelError::MissingReference { .. })
            | TreeHopperError::Path(PathError::Model(ModelError::MissingReference { .. })) => {
                Some("Check that every referenced talent id exists in the talents table.".to_string())
            }
            TreeHopperError::Model(ModelError::MalformedRecord { .. }) => {
                Some("Fix the reported row; ids must be UUIDs and tiers integers.".to_string())
            }
            TreeHopperError::Path(PathError::CyclicPrerequisite { .. }) => {
                Some("Break the loop in the requiredTalentId column.".to_string())
            }
            _ => None,
        }
    }
}

//! Path analysis error types

use lemodele::ModelError;
use thiserror::Error;
use uuid::Uuid;

/// Result type for path analysis.
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors raised while building talent trees or scoring paths
#[derive(Debug, Error)]
pub enum PathError {
    /// Unresolved talent reference or other data error
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The required-talent chain loops back on itself
    #[error("Cyclic prerequisite: talent {revisited} reappears in the chain starting at {start}")]
    CyclicPrerequisite {
        /// First talent of the chain
        start: Uuid,
        /// Talent seen twice
        revisited: Uuid,
    },
}

impl PathError {
    /// True if the error comes from a dangling talent reference
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, PathError::Model(ModelError::MissingReference { .. }))
    }
}

//! lemodele - Talent Data Model
//!
//! *Le Modèle* (The Model) - Talents, specializations, the talent index and CSV loading

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Loaded and reference-checked talent/specialization data.
pub mod catalog;
/// Model error types.
pub mod error;
/// Identifier-keyed talent lookup.
pub mod index;
/// CSV table loading.
pub mod loader;
/// Specialization records.
pub mod specialization;
/// Talent records.
pub mod talent;

pub use catalog::Catalog;
pub use error::{ModelError, Result};
pub use index::TalentIndex;
pub use loader::{load_specializations, load_talents, parse_specializations, parse_talents};
pub use specialization::{ReservedTalent, Specialization, SpecializationId};
pub use talent::{Talent, TalentId};

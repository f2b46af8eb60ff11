use crate::error::Result;
use crate::index::TalentIndex;
use crate::loader::{load_specializations, load_talents};
use crate::specialization::Specialization;
use std::path::Path;

/// Loaded talent and specialization data whose references all resolve.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Talent lookup
    pub talents: TalentIndex,
    /// Specializations in input order
    pub specializations: Vec<Specialization>,
}

impl Catalog {
    /// Build a catalog from already-parsed records, rejecting dangling
    /// talent references.
    pub fn new(talents: TalentIndex, specializations: Vec<Specialization>) -> Result<Self> {
        talents.validate_references(&specializations)?;
        Ok(Self {
            talents,
            specializations,
        })
    }

    /// Load both tables and validate references
    pub fn load(talents_path: &Path, specializations_path: &Path) -> Result<Self> {
        let talents = TalentIndex::new(load_talents(talents_path)?);
        let specializations = load_specializations(specializations_path)?;

        let catalog = Self::new(talents, specializations)?;
        tracing::info!(
            "Catalog ready: {} talents, {} specializations",
            catalog.talents.len(),
            catalog.specializations.len()
        );
        Ok(catalog)
    }
}

use crate::error::{ModelError, Result};
use crate::specialization::Specialization;
use crate::talent::{Talent, TalentId};
use std::collections::HashMap;

/// Identifier-keyed talent lookup that remembers load order.
#[derive(Debug, Clone, Default)]
pub struct TalentIndex {
    talents: Vec<Talent>,
    positions: HashMap<TalentId, usize>,
}

impl TalentIndex {
    /// Build an index from loaded talents.
    ///
    /// Identifiers are expected to be unique (the loader rejects duplicates);
    /// if one repeats anyway, lookups see the later record.
    pub fn new(talents: Vec<Talent>) -> Self {
        let positions = talents
            .iter()
            .enumerate()
            .map(|(position, talent)| (talent.id, position))
            .collect();

        Self { talents, positions }
    }

    /// Look up a talent by id
    pub fn get(&self, id: TalentId) -> Option<&Talent> {
        self.positions.get(&id).map(|&position| &self.talents[position])
    }

    /// Look up a talent that must exist.
    ///
    /// `referenced_by` is only evaluated on failure.
    pub fn resolve<F>(&self, id: TalentId, referenced_by: F) -> Result<&Talent>
    where
        F: FnOnce() -> String,
    {
        self.get(id)
            .ok_or_else(|| ModelError::missing_reference(id.as_uuid(), referenced_by()))
    }

    /// Check whether a talent id is known
    pub fn contains(&self, id: TalentId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of talents
    pub fn len(&self) -> usize {
        self.talents.len()
    }

    /// True if no talents are loaded
    pub fn is_empty(&self) -> bool {
        self.talents.is_empty()
    }

    /// Talents in load order
    pub fn iter(&self) -> impl Iterator<Item = &Talent> {
        self.talents.iter()
    }

    /// Verify that every non-null talent reference resolves.
    ///
    /// Covers talent prerequisites as well as the mandatory and optional
    /// talents of every specialization. Stops at the first dangling reference.
    pub fn validate_references(&self, specializations: &[Specialization]) -> Result<()> {
        for talent in &self.talents {
            if let Some(required) = talent.required_talent {
                self.resolve(required, || format!("prerequisite of talent {}", talent))?;
            }
        }

        for specialization in specializations {
            for (id, kind) in specialization.talent_references() {
                self.resolve(id, || format!("{} of specialization {}", kind, specialization))?;
            }
        }

        Ok(())
    }
}

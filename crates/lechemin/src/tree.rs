// Required-talent ancestor chains
//
// Despite the name a talent tree is linear: each talent has at most one
// direct prerequisite, so the walk never branches.

use crate::error::{PathError, Result};
use lemodele::{Talent, TalentId, TalentIndex};
use std::collections::HashSet;

/// Ordered chain of talents from a starting talent through its prerequisites
#[derive(Debug, Clone, Default)]
pub struct TalentTree<'a> {
    talents: Vec<&'a Talent>,
}

impl<'a> TalentTree<'a> {
    /// Walk the required-talent links from `start`.
    ///
    /// The starting talent comes first, followed by its direct prerequisite
    /// and so on until a talent with no requirement. An absent `start`
    /// produces an empty tree. Every id on the way must resolve, and a
    /// talent seen twice aborts with [`PathError::CyclicPrerequisite`].
    pub fn build(start: Option<TalentId>, index: &'a TalentIndex) -> Result<Self> {
        let Some(start) = start else {
            return Ok(Self::default());
        };

        let mut talents = Vec::new();
        let mut visited = HashSet::new();
        let mut current = index.resolve(start, || format!("talent tree starting at {}", start))?;

        loop {
            if !visited.insert(current.id) {
                return Err(PathError::CyclicPrerequisite {
                    start: start.as_uuid(),
                    revisited: current.id.as_uuid(),
                });
            }
            talents.push(current);

            match current.required_talent {
                Some(required) => {
                    let dependent = current;
                    current = index.resolve(required, || format!("prerequisite of talent {}", dependent))?;
                }
                None => break,
            }
        }

        Ok(Self { talents })
    }

    /// True if the chain has no talents
    pub fn is_empty(&self) -> bool {
        self.talents.is_empty()
    }

    /// Chain length
    pub fn len(&self) -> usize {
        self.talents.len()
    }

    /// Talents, starting talent first
    pub fn talents(&self) -> &[&'a Talent] {
        &self.talents
    }

    /// Check whether a talent appears anywhere in the chain
    pub fn contains(&self, id: TalentId) -> bool {
        self.talents.iter().any(|talent| talent.id == id)
    }

    /// Check whether any of the given talents appears in the chain
    pub fn contains_any<I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = TalentId>,
    {
        ids.into_iter().any(|id| self.contains(id))
    }
}

/// Walk the chain of every talent in the index.
///
/// Returns the longest chain length; fails on the first dangling
/// prerequisite or cycle.
pub fn verify_chains(index: &TalentIndex) -> Result<usize> {
    let mut longest = 0;
    for talent in index.iter() {
        let tree = TalentTree::build(Some(talent.id), index)?;
        longest = longest.max(tree.len());
    }
    Ok(longest)
}

use crate::classify::{classify, MatchKind};
use crate::error::Result;
use crate::tree::TalentTree;
use lemodele::{Specialization, TalentIndex};
use serde::{Deserialize, Serialize};

/// Whether a source covers the target's mandatory talent tree.
///
/// `NotRequired` is distinct from `Missing`: a target without a mandatory
/// talent has no opinion, and classification treats that like a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum MandatoryMatch {
    /// Target has no mandatory talent
    NotRequired,
    /// Source invests in the mandatory tree
    Matched,
    /// Source misses the mandatory tree
    Missing,
}

impl MandatoryMatch {
    /// Nullable-boolean view used in the report
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::NotRequired => None,
            Self::Matched => Some(true),
            Self::Missing => Some(false),
        }
    }
}

impl From<MandatoryMatch> for Option<bool> {
    fn from(value: MandatoryMatch) -> Self {
        value.as_option()
    }
}

impl From<Option<bool>> for MandatoryMatch {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::NotRequired,
            Some(true) => Self::Matched,
            Some(false) => Self::Missing,
        }
    }
}

/// A scored source → target relationship across adjacent tiers
#[derive(Debug, Clone)]
pub struct SpecializationPath<'a> {
    /// Lower-tier specialization
    pub source: &'a Specialization,
    /// Specialization one tier above the source
    pub target: &'a Specialization,
    /// Coverage of the target's mandatory tree
    pub mandatory_match: MandatoryMatch,
    /// Number of target optional trees the source touches
    pub optional_matches: usize,
}

impl SpecializationPath<'_> {
    /// Match strength, derived from the scores and the target tier
    pub fn kind(&self) -> MatchKind {
        classify(self.mandatory_match, self.optional_matches, self.target.tier)
    }
}

/// A target specialization with its talent trees resolved once, ready to
/// score any number of candidate sources.
#[derive(Debug, Clone)]
pub struct TargetProfile<'a> {
    /// The target
    pub target: &'a Specialization,
    /// Chain of the mandatory talent, empty when there is none
    pub mandatory: TalentTree<'a>,
    /// One chain per optional talent, in declared order
    pub optional: Vec<TalentTree<'a>>,
}

impl<'a> TargetProfile<'a> {
    /// Resolve the target's mandatory and optional talent trees
    pub fn build(target: &'a Specialization, index: &'a TalentIndex) -> Result<Self> {
        let mandatory = TalentTree::build(target.mandatory_talent, index)?;
        let optional = target
            .optional_talents
            .iter()
            .map(|id| TalentTree::build(Some(*id), index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            target,
            mandatory,
            optional,
        })
    }

    /// Only sources exactly one tier below the target are candidates
    pub fn accepts(&self, source: &Specialization) -> bool {
        i64::from(source.tier) == i64::from(self.target.tier) - 1
    }

    /// Score a candidate source against this target.
    ///
    /// The source's mandatory and optional talents all count as investment.
    /// Each optional tree contributes at most one match.
    pub fn score(&self, source: &'a Specialization) -> SpecializationPath<'a> {
        let mandatory_match = if self.mandatory.is_empty() {
            MandatoryMatch::NotRequired
        } else if self.mandatory.contains_any(source.invested_talents()) {
            MandatoryMatch::Matched
        } else {
            MandatoryMatch::Missing
        };

        let optional_matches = self
            .optional
            .iter()
            .filter(|tree| tree.contains_any(source.invested_talents()))
            .count();

        SpecializationPath {
            source,
            target: self.target,
            mandatory_match,
            optional_matches,
        }
    }
}

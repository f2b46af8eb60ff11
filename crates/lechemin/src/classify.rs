use crate::score::MandatoryMatch;
use serde::{Deserialize, Serialize};

/// Base number of optional matches expected, added to the target tier.
pub const BASE_THRESHOLD: i64 = 4;

/// How well a source specialization supports unlocking a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Source clearly leads to the target
    Strong,
    /// Source is one match short, or misses the mandatory talent
    Likely,
    /// No meaningful overlap
    None,
}

impl MatchKind {
    /// Report label
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Likely => "Likely",
            Self::None => "None",
        }
    }
}

/// Optional matches needed for a strong match.
///
/// `BASE_THRESHOLD + target_tier`, one less when the mandatory talent is
/// matched. May be zero or negative for low tiers.
pub fn threshold(mandatory: MandatoryMatch, target_tier: i32) -> i64 {
    let base = BASE_THRESHOLD + i64::from(target_tier);
    if mandatory == MandatoryMatch::Matched {
        base - 1
    } else {
        base
    }
}

/// Classify a scored path.
///
/// An absent mandatory requirement counts as satisfied. A known miss caps
/// the result at `Likely`, and only when the full threshold is reached.
pub fn classify(mandatory: MandatoryMatch, optional_matches: usize, target_tier: i32) -> MatchKind {
    let threshold = threshold(mandatory, target_tier);
    let count = i64::try_from(optional_matches).unwrap_or(i64::MAX);
    let satisfied = mandatory != MandatoryMatch::Missing;

    if satisfied && count >= threshold {
        MatchKind::Strong
    } else if (!satisfied && count >= threshold) || (satisfied && count >= threshold - 1) {
        MatchKind::Likely
    } else {
        MatchKind::None
    }
}

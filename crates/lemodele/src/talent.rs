use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// Unique talent identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TalentId(Uuid);

impl TalentId {
    /// Wrap a raw UUID
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for TalentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for TalentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for TalentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A purchasable talent.
///
/// `required_talent` links to the direct prerequisite, so following it
/// repeatedly walks a singly-linked ancestor chain.
#[derive(Debug, Clone)]
pub struct Talent {
    /// Unique key
    pub id: TalentId,
    /// Progression tier
    pub tier: i32,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Whether the talent may be bought more than once
    pub allow_multiple_purchases: bool,
    /// Direct prerequisite, if any
    pub required_talent: Option<TalentId>,
}

impl PartialEq for Talent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Talent {}

impl Hash for Talent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Talent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Id={})", self.name, self.id)
    }
}

use crate::talent::TalentId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// Unique specialization identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpecializationId(Uuid);

impl SpecializationId {
    /// Wrap a raw UUID
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SpecializationId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for SpecializationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for SpecializationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Talent granted by a specialization; display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedTalent {
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
}

/// A specialization that unlocks once its talent prerequisites are met.
#[derive(Debug, Clone)]
pub struct Specialization {
    /// Unique key
    pub id: SpecializationId,
    /// Progression tier
    pub tier: i32,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Free-text requirements
    pub requirements: String,
    /// The single talent the specialization requires
    pub mandatory_talent: Option<TalentId>,
    /// Alternative qualifying talents, in declared order
    pub optional_talents: Vec<TalentId>,
    /// Other free-text unlock options
    pub other_options: Vec<String>,
    /// Talent granted by the specialization
    pub reserved_talent: ReservedTalent,
}

impl Specialization {
    /// Every talent this specialization invests in: the mandatory talent
    /// first, then the optional talents in declared order.
    pub fn invested_talents(&self) -> impl Iterator<Item = TalentId> + '_ {
        self.mandatory_talent
            .into_iter()
            .chain(self.optional_talents.iter().copied())
    }

    /// Every non-null talent reference, with a description of where it came from.
    pub fn talent_references(&self) -> impl Iterator<Item = (TalentId, &'static str)> + '_ {
        self.mandatory_talent
            .into_iter()
            .map(|id| (id, "mandatory talent"))
            .chain(
                self.optional_talents
                    .iter()
                    .map(|id| (*id, "optional talent")),
            )
    }
}

impl PartialEq for Specialization {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Specialization {}

impl Hash for Specialization {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Id={})", self.name, self.id)
    }
}

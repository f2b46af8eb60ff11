use crate::classify::MatchKind;
use crate::error::Result;
use crate::score::{MandatoryMatch, SpecializationPath, TargetProfile};
use lemodele::{Catalog, Specialization, TalentIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Targets reachable from one source, grouped by match kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Source name, as spelled by the first source seen for this key
    pub name: String,
    /// Strongly matched target names
    pub strong: Vec<String>,
    /// Likely target names
    pub likely: Vec<String>,
    /// Unmatched target names
    pub none: Vec<String>,
}

impl PathSummary {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn push(&mut self, kind: MatchKind, target: &str) {
        let bucket = match kind {
            MatchKind::Strong => &mut self.strong,
            MatchKind::Likely => &mut self.likely,
            MatchKind::None => &mut self.none,
        };
        bucket.push(target.to_string());
    }
}

/// Persisted form of a scored path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetail {
    /// Source specialization name
    pub source: String,
    /// Target specialization name
    pub target: String,
    /// Classified match kind
    pub kind: MatchKind,
    /// Coverage of the target's mandatory talent tree
    pub is_mandatory_talent_match: MandatoryMatch,
    /// Target optional trees matched by the source
    pub optional_talent_matches: usize,
}

impl From<&SpecializationPath<'_>> for PathDetail {
    fn from(path: &SpecializationPath<'_>) -> Self {
        Self {
            source: path.source.name.clone(),
            target: path.target.name.clone(),
            kind: path.kind(),
            is_mandatory_talent_match: path.mandatory_match,
            optional_talent_matches: path.optional_matches,
        }
    }
}

/// Summaries for tier-1 and tier-2 sources plus every scored path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Summaries of tier-1 sources
    pub tier1: Vec<PathSummary>,
    /// Summaries of tier-2 sources
    pub tier2: Vec<PathSummary>,
    /// Every scored path, in generation order
    pub details: Vec<PathDetail>,
}

impl Report {
    /// Score and aggregate every specialization in a catalog
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        build_report(&catalog.specializations, &catalog.talents)
    }

    /// Number of detail entries with the given kind
    pub fn count(&self, kind: MatchKind) -> usize {
        self.details.iter().filter(|detail| detail.kind == kind).count()
    }
}

/// Insertion-ordered summaries keyed by normalized source name
#[derive(Default)]
struct SummaryBucket {
    summaries: Vec<PathSummary>,
    positions: HashMap<String, usize>,
}

impl SummaryBucket {
    fn entry(&mut self, source: &Specialization) -> &mut PathSummary {
        let summaries = &mut self.summaries;
        let position = *self
            .positions
            .entry(normalize_name(&source.name))
            .or_insert_with(|| {
                summaries.push(PathSummary::new(&source.name));
                summaries.len() - 1
            });
        &mut self.summaries[position]
    }
}

/// Grouping key for summaries: trimmed and case-folded
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Score every tier-adjacent (source, target) pair.
///
/// Targets are visited in input order and, for each, sources in input order.
/// Each target's trees are resolved once, even when no source qualifies.
pub fn score_paths<'a>(
    specializations: &'a [Specialization],
    index: &'a TalentIndex,
) -> Result<Vec<SpecializationPath<'a>>> {
    let mut paths = Vec::new();

    for target in specializations {
        let profile = TargetProfile::build(target, index)?;
        let before = paths.len();

        paths.extend(
            specializations
                .iter()
                .filter(|source| profile.accepts(source))
                .map(|source| profile.score(source)),
        );

        tracing::debug!(
            "Scored {} candidate sources for {}",
            paths.len() - before,
            target
        );
    }

    Ok(paths)
}

/// Group scored paths into per-source summaries.
///
/// Only tier-1 and tier-2 sources get a summary; sources whose names
/// normalize to the same key share one.
pub fn aggregate(paths: &[SpecializationPath<'_>]) -> Report {
    let mut tier1 = SummaryBucket::default();
    let mut tier2 = SummaryBucket::default();

    for path in paths {
        let bucket = match path.source.tier {
            1 => &mut tier1,
            2 => &mut tier2,
            _ => continue,
        };
        bucket.entry(path.source).push(path.kind(), &path.target.name);
    }

    Report {
        tier1: tier1.summaries,
        tier2: tier2.summaries,
        details: paths.iter().map(PathDetail::from).collect(),
    }
}

/// Score all specializations and aggregate the result
pub fn build_report(specializations: &[Specialization], index: &TalentIndex) -> Result<Report> {
    let paths = score_paths(specializations, index)?;
    let report = aggregate(&paths);

    tracing::info!(
        "Report built: {} paths, {} tier-1 and {} tier-2 summaries",
        report.details.len(),
        report.tier1.len(),
        report.tier2.len()
    );

    Ok(report)
}

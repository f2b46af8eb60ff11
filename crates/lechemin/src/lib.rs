//! lechemin - Specialization Path Analysis
//!
//! *Le Chemin* (The Path) - Talent trees, path scoring, match classification and reports

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Match kind classification.
pub mod classify;
/// Path analysis error types.
pub mod error;
/// Report aggregation.
pub mod report;
/// Source/target path scoring.
pub mod score;
/// Required-talent ancestor chains.
pub mod tree;

pub use classify::{classify, threshold, MatchKind};
pub use error::{PathError, Result};
pub use report::{build_report, normalize_name, score_paths, PathDetail, PathSummary, Report};
pub use score::{MandatoryMatch, SpecializationPath, TargetProfile};
pub use tree::{verify_chains, TalentTree};

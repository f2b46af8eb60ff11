// Run Orchestration
//
// Load -> score -> write, with a cancellation checkpoint before each phase.

use crate::config::TreeHopperConfig;
use crate::errors::{Result, TreeHopperError};
use crate::writer::write_report;
use lechemin::{verify_chains, MatchKind, Report};
use lemodele::Catalog;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Shared flag that asks a run to stop at its next checkpoint
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create an unset flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// True once cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn checkpoint(&self, phase: &'static str) -> Result<()> {
        if self.is_cancelled() {
            warn!("Cancellation requested, skipping {}", phase);
            return Err(TreeHopperError::Cancelled { phase });
        }
        Ok(())
    }
}

/// Outcome of a report run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the report was written
    pub report_path: PathBuf,
    /// Number of scored paths
    pub paths: usize,
    /// Strong paths
    pub strong: usize,
    /// Likely paths
    pub likely: usize,
    /// Paths with no match
    pub none: usize,
    /// Tier-1 summary entries
    pub tier1_summaries: usize,
    /// Tier-2 summary entries
    pub tier2_summaries: usize,
    /// Wall-clock time
    pub elapsed_ms: u128,
}

/// Outcome of a data check
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Talents loaded
    pub talents: usize,
    /// Specializations loaded
    pub specializations: usize,
    /// Longest required-talent chain
    pub longest_chain: usize,
}

/// Load the tables, score every path and write the report.
///
/// Nothing is written unless scoring succeeds.
pub fn run_report(config: &TreeHopperConfig, cancel: &CancelFlag) -> Result<RunSummary> {
    config.validate()?;
    let started = Instant::now();
    info!("TreeHopper run started at {}", chrono::Local::now().to_rfc3339());

    cancel.checkpoint("loading")?;
    let catalog = Catalog::load(&config.input.talents, &config.input.specializations)?;

    cancel.checkpoint("scoring")?;
    let report = Report::from_catalog(&catalog)?;

    cancel.checkpoint("writing")?;
    write_report(&report, &config.output.report, config.output.pretty)?;

    let summary = RunSummary {
        report_path: config.output.report.clone(),
        paths: report.details.len(),
        strong: report.count(MatchKind::Strong),
        likely: report.count(MatchKind::Likely),
        none: report.count(MatchKind::None),
        tier1_summaries: report.tier1.len(),
        tier2_summaries: report.tier2.len(),
        elapsed_ms: started.elapsed().as_millis(),
    };
    info!(
        "Run finished in {}ms: {} strong, {} likely, {} none",
        summary.elapsed_ms, summary.strong, summary.likely, summary.none
    );
    Ok(summary)
}

/// Load the tables and walk every talent chain without scoring
pub fn run_check(config: &TreeHopperConfig, cancel: &CancelFlag) -> Result<CheckSummary> {
    config.validate()?;

    cancel.checkpoint("loading")?;
    let catalog = Catalog::load(&config.input.talents, &config.input.specializations)?;

    cancel.checkpoint("chain verification")?;
    let longest_chain = verify_chains(&catalog.talents)?;

    Ok(CheckSummary {
        talents: catalog.talents.len(),
        specializations: catalog.specializations.len(),
        longest_chain,
    })
}

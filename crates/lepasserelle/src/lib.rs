//! lepasserelle - Command-Line Bridge
//!
//! *La Passerelle* (The Bridge) - Configuration, run orchestration and report output
//! around the `lemodele` and `lechemin` crates.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Command-line parsing and command dispatch.
pub mod cli;
/// TOML/environment configuration.
pub mod config;
/// Run-level error types.
pub mod errors;
/// Load, score and write orchestration.
pub mod runner;
/// JSON report output.
pub mod writer;

pub use config::TreeHopperConfig;
pub use errors::{Result, TreeHopperError};
pub use runner::{run_check, run_report, CancelFlag, CheckSummary, RunSummary};
pub use writer::{render_report, write_report};

// CLI Interface
//
// This module provides the command-line interface for TreeHopper.

use crate::config::TreeHopperConfig;
use crate::errors::TreeHopperError;
use crate::runner::{run_check, run_report, CancelFlag};
use anyhow::{Context, Result as AnyhowResult};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// TreeHopper - Specialization path reports
#[derive(Parser, Debug)]
#[command(name = "treehopper")]
#[command(author = "TreeHopper Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find which specializations lead to which, based on shared talents", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ./treehopper.toml when present)
    #[arg(global = true, long = "config", short = 'c')]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Input table overrides shared by every command
#[derive(clap::Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Talents CSV
    #[arg(long = "talents", value_name = "PATH")]
    pub talents: Option<PathBuf>,

    /// Specializations CSV
    #[arg(long = "specializations", value_name = "PATH")]
    pub specializations: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every specialization path and write the report
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Report output file
        #[arg(long = "output", short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,

        /// Write compact JSON instead of indented
        #[arg(long = "compact")]
        compact: bool,
    },

    /// Load the tables and verify every talent reference and chain
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl Cli {
    /// Run the CLI
    pub async fn run(self) -> AnyhowResult<()> {
        let working_dir = std::env::current_dir().context("Failed to read working directory")?;
        let config = TreeHopperConfig::load(self.config.as_deref(), &working_dir)?.with_env();

        init_logging_impl(&config.log_level, self.verbose);

        let cancel = CancelFlag::new();
        spawn_interrupt_listener(cancel.clone());

        let command = self.command.unwrap_or(Commands::Report {
            input: InputArgs::default(),
            output: None,
            compact: false,
        });

        match command {
            Commands::Report {
                input,
                output,
                compact,
            } => {
                let mut config = apply_input_overrides(config, input);
                if let Some(output) = output {
                    config.output.report = output;
                }
                if compact {
                    config.output.pretty = false;
                }
                cmd_report_impl(config, cancel).await
            }
            Commands::Check { input } => {
                cmd_check_impl(apply_input_overrides(config, input), cancel).await
            }
        }
    }
}

/// Flag values win over config file and environment
fn apply_input_overrides(mut config: TreeHopperConfig, input: InputArgs) -> TreeHopperConfig {
    if let Some(talents) = input.talents {
        config.input.talents = talents;
    }
    if let Some(specializations) = input.specializations {
        config.input.specializations = specializations;
    }
    config
}

/// Initialize logging implementation
fn init_logging_impl(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Ctrl-C stops the run at its next phase boundary
fn spawn_interrupt_listener(cancel: CancelFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current phase");
            cancel.cancel();
        }
    });
}

/// Log the recovery hint, if any, before the error reaches `main`
fn with_hint(err: TreeHopperError) -> TreeHopperError {
    if let Some(hint) = err.suggestion() {
        info!("Hint: {}", hint);
    }
    err
}

/// Report command implementation
async fn cmd_report_impl(config: TreeHopperConfig, cancel: CancelFlag) -> AnyhowResult<()> {
    let summary = tokio::task::spawn_blocking(move || run_report(&config, &cancel))
        .await
        .context("Report task failed")?
        .map_err(with_hint)
        .context("Report run failed")?;

    println!("\n✓ Report complete!");
    println!("  Report: {}", summary.report_path.display());
    println!("  Paths: {}", summary.paths);
    println!("  Strong: {}", summary.strong);
    println!("  Likely: {}", summary.likely);
    println!("  None: {}", summary.none);
    println!("  Tier 1 sources: {}", summary.tier1_summaries);
    println!("  Tier 2 sources: {}", summary.tier2_summaries);
    println!("  Time: {}ms", summary.elapsed_ms);

    Ok(())
}

/// Check command implementation
async fn cmd_check_impl(config: TreeHopperConfig, cancel: CancelFlag) -> AnyhowResult<()> {
    let summary = tokio::task::spawn_blocking(move || run_check(&config, &cancel))
        .await
        .context("Check task failed")?
        .map_err(with_hint)
        .context("Data check failed")?;

    println!("\n✓ Data is consistent");
    println!("  Talents: {}", summary.talents);
    println!("  Specializations: {}", summary.specializations);
    println!("  Longest prerequisite chain: {}", summary.longest_chain);

    Ok(())
}

//! treehopper binary entry point

use clap::Parser;
use lepasserelle::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse().run().await
}

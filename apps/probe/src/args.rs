//! Command-line interface of the probe.

use clap::Parser;
use std::path::PathBuf;

/// Reports what `plinth` resolved for this target and process.
#[derive(Debug, Parser)]
#[command(name = "plinth-probe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the platform configuration detected by plinth")]
pub struct Cli {
    /// Settings file overlaid on the detected configuration (`.toml`, `.json`, `.yaml`)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail a sample invariant after the report to exercise the failure policy
    #[arg(long)]
    pub trip: bool,

    /// Log filter directives, e.g. `plinth=debug`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

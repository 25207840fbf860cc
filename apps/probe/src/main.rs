use anyhow::Context;
use clap::Parser;
use plinth::{AssertionOutcome, BuildConfig};
use plinth_logger::Logger;
use plinth_probe::PlatformReport;
use plinth_probe::args::Cli;
use std::io::Write;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).ansi(!cli.json);
    if let Some(filter) = &cli.log {
        logger = logger.env_filter(filter.as_str());
    }
    let _log = logger.init()?;

    let config = plinth::init_from_settings(cli.config.as_deref())
        .context("Critical: platform settings are malformed")?;
    plinth::debug_output!(?config, "Probe configured");

    let report = PlatformReport::collect();
    let mut out = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{report}")?;
    }

    if cli.trip {
        trip(config);
    }

    Ok(())
}

fn trip(config: &BuildConfig) {
    let outcome = plinth::invariant!(config.os.as_str().is_empty());
    match outcome {
        AssertionOutcome::Skipped => info!("Assertions are inactive in this build, nothing to trip"),
        outcome => info!(?outcome, "Sample invariant tripped"),
    }
}

//! HiitLap - Treadmill Interval Pace Calculator
//!
//! Main entry point for the command line front end.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting HiitLap v{}", env!("CARGO_PKG_VERSION"));

    let args = cli::Cli::parse();
    cli::run(args)
}

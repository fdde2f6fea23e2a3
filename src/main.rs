//! Barcode Collector - gathers a sample of real release barcodes.
//!
//! Pages through MusicBrainz release search results (rock CDs with a
//! barcode by default), keeps the unique barcodes that look valid, and
//! writes a fixed-size sample to `barcodes_<count>.txt`, one per line.

pub mod catalog;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("barcode_collector=info".parse()?))
        .init();

    cli::run_command(&args)
}

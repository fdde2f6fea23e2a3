//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `collect`: Page through the catalog and write the barcode file
//! - `config`: Show or initialise the configuration file

mod collect;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use collect::cmd_collect;
pub use config::cmd_config;

/// Barcode Collector CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the one in the OS config directory
    #[arg(long, global = true, env = "BARCODE_COLLECTOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Collect release barcodes and write them to a file (the default)
    Collect {
        /// Number of unique barcodes to collect
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Output file (default: barcodes_<count>.txt in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip pages that fail transiently instead of requesting them again
        #[arg(long)]
        skip_failed_pages: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
        /// Overwrite an existing config file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Run the specified CLI command, defaulting to `collect`.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };

    match &cli.command {
        Some(Commands::Collect {
            count,
            output,
            skip_failed_pages,
        }) => cmd_collect(config, *count, output.as_ref(), *skip_failed_pages),
        Some(Commands::Config { init, force }) => {
            cmd_config(&config, cli.config.as_ref(), *init, *force)
        }
        None => cmd_collect(config, None, None, false),
    }
}

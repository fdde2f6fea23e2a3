//! Command-line interface for barcode-collector.
//!
//! Running with no subcommand collects barcodes using the configured
//! defaults; `config` inspects or creates the configuration file.

mod commands;

pub use commands::{Cli, run_command};

//! Barcode collection command.

use std::path::PathBuf;

use crate::catalog::MusicBrainzClient;
use crate::collector::{self, CollectorSettings, StopReason, output};
use crate::config::Config;

/// Collect barcodes and write them to the output file
pub fn cmd_collect(
    mut config: Config,
    count: Option<usize>,
    output_path: Option<&PathBuf>,
    skip_failed_pages: bool,
) -> anyhow::Result<()> {
    if skip_failed_pages {
        config.collection.retry_failed_page = false;
    }

    let target = count.unwrap_or(config.collection.target);
    let path = output_path
        .cloned()
        .unwrap_or_else(|| output::default_path(&config.collection.output_dir, target));

    let client = MusicBrainzClient::new(&config.search)?;
    let settings = CollectorSettings::from_config(&config);

    println!("Starting fetch for {} barcodes...", target);
    println!("  Query: {}", settings.query.to_lucene());
    println!();

    // Strictly sequential work, so a single-threaded runtime is all we need
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let summary = rt.block_on(collector::run(client, settings, target, &path))?;

    println!();
    match &summary.stop_reason {
        StopReason::Sufficient => println!("✓ Target reached"),
        StopReason::Exhausted => println!("✗ No more releases found"),
        StopReason::SafetyLimit { .. } => println!("✗ Giving up searching deeper"),
        StopReason::Fatal(e) => eprintln!("✗ Error: {}", e),
    }
    if summary.transient_errors > 0 {
        println!("  {} request(s) failed along the way", summary.transient_errors);
    }
    println!(
        "Successfully wrote {} barcodes to {}",
        summary.written,
        summary.path.display()
    );

    Ok(())
}

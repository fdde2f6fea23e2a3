//! Newline-delimited barcode output file.

use std::path::{Path, PathBuf};

use super::barcode::BarcodeSet;
use crate::error::{Result, ResultExt};

/// `barcodes_<target>.txt`
pub fn default_file_name(target: usize) -> String {
    format!("barcodes_{}.txt", target)
}

/// Default output location for a run collecting `target` barcodes
pub fn default_path(output_dir: &Path, target: usize) -> PathBuf {
    output_dir.join(default_file_name(target))
}

/// Write up to `limit` barcodes, one per line, replacing any existing file.
///
/// There is no trailing newline. Returns the number of barcodes written.
pub fn write_barcodes(path: &Path, barcodes: &BarcodeSet, limit: usize) -> Result<usize> {
    let selected = barcodes.take(limit);
    let contents = selected
        .iter()
        .map(|b| b.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    std::fs::write(path, contents)
        .with_context(format!("writing barcodes to {}", path.display()))?;

    tracing::debug!("Wrote {} barcodes to {:?}", selected.len(), path);
    Ok(selected.len())
}

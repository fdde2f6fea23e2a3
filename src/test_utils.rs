//! Test utilities and fixtures for barcode-collector tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{fast_settings, scripted_catalog};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let collector = Collector::new(scripted_catalog(3, 100), fast_settings());
//!     let report = collector.collect(250).await;
//!     // ... assertions
//! }
//! ```

use std::time::Duration;

use crate::catalog::Release;
use crate::catalog::traits::mocks::ScriptedSearch;
use crate::collector::CollectorSettings;

/// A release whose only interesting field is its barcode.
pub fn release_with_barcode(barcode: &str) -> Release {
    Release {
        id: format!("release-{}", barcode),
        title: "Test Release".to_string(),
        barcode: Some(barcode.to_string()),
    }
}

/// `count` releases with valid 13-digit barcodes unique to `offset`.
///
/// Pages built with distinct offsets never share a barcode.
pub fn unique_releases(offset: u32, count: u32) -> Vec<Release> {
    (0..count)
        .map(|i| {
            let n = 4_000_000_000_000u64 + u64::from(offset) + u64::from(i);
            release_with_barcode(&n.to_string())
        })
        .collect()
}

/// A catalog of `pages` full pages of unique barcodes, then nothing.
pub fn scripted_catalog(pages: u32, page_size: u32) -> ScriptedSearch {
    (0..pages).fold(ScriptedSearch::new(), |search, page| {
        let offset = page * page_size;
        search.page(offset, unique_releases(offset, page_size))
    })
}

/// Stock settings without the throttle delays.
pub fn fast_settings() -> CollectorSettings {
    CollectorSettings {
        page_delay: Duration::ZERO,
        error_delay: Duration::ZERO,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_releases_do_not_overlap_across_pages() {
        let barcodes: HashSet<_> = unique_releases(0, 100)
            .into_iter()
            .chain(unique_releases(100, 100))
            .filter_map(|r| r.barcode)
            .collect();
        assert_eq!(barcodes.len(), 200);
        assert!(barcodes.iter().all(|b| b.len() == 13));
    }

    #[test]
    fn test_fast_settings_keep_stock_paging() {
        let settings = fast_settings();
        assert_eq!(settings.page_size, 100);
        assert_eq!(settings.page_delay, Duration::ZERO);
    }
}

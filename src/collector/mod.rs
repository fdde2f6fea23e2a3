//! Barcode collection - pages through release search results and keeps
//! the unique, valid barcodes until there are enough.
//!
//! The loop is strictly sequential: one request, then a throttle delay,
//! then the next request. It ends in one of four ways (see [`StopReason`]);
//! none of them is an error from the caller's point of view, and whatever
//! was collected is always written out.
//!
//! A request that fails transiently (network or decode failure) is logged
//! and followed by a longer delay. By default the same page is requested
//! again, up to a fixed number of attempts before it is skipped;
//! [`TransientErrorPolicy::SkipPage`] moves on straight away instead.

pub mod barcode;
pub mod output;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{CatalogError, PageRequest, ReleaseSearch, SearchQuery};
use crate::config::Config;
use crate::error::Result;

pub use barcode::BarcodeSet;

/// What to do with a page whose request failed transiently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientErrorPolicy {
    /// Move on to the next page (the failed page's results are lost)
    SkipPage,
    /// Request the same page again, skipping it after `max_attempts` failures in a row
    RetryPage { max_attempts: u32 },
}

/// Knobs for the collection loop
#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub query: SearchQuery,
    pub page_size: u32,
    /// Give up once the offset passes this and the target is still unmet
    pub max_offset: u32,
    pub page_delay: Duration,
    pub error_delay: Duration,
    pub on_transient_error: TransientErrorPolicy,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl CollectorSettings {
    pub fn from_config(config: &Config) -> Self {
        let collection = &config.collection;
        let on_transient_error = if collection.retry_failed_page {
            TransientErrorPolicy::RetryPage {
                max_attempts: collection.max_page_attempts.max(1),
            }
        } else {
            TransientErrorPolicy::SkipPage
        };

        Self {
            query: SearchQuery::from_config(&config.search),
            page_size: config.search.page_size.max(1),
            max_offset: collection.max_offset,
            page_delay: collection.page_delay(),
            error_delay: collection.error_delay(),
            on_transient_error,
        }
    }
}

/// Why the collection loop stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Collected at least the target number of barcodes
    Sufficient,
    /// The catalog returned an empty page
    Exhausted,
    /// The offset passed the configured depth without reaching the target
    SafetyLimit { offset: u32 },
    /// A request failed in a way retrying won't fix (non-success HTTP status)
    Fatal(CatalogError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sufficient => write!(f, "target reached"),
            Self::Exhausted => write!(f, "no more releases"),
            Self::SafetyLimit { offset } => {
                write!(f, "gave up searching deeper (offset {})", offset)
            }
            Self::Fatal(e) => write!(f, "stopped on error: {}", e),
        }
    }
}

/// Outcome of one collection run
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub barcodes: BarcodeSet,
    pub stop_reason: StopReason,
    /// Non-empty pages successfully fetched
    pub pages_fetched: u32,
    /// Requests that failed transiently
    pub transient_errors: u32,
}

/// Drives a [`ReleaseSearch`] until enough barcodes are collected
pub struct Collector<S> {
    search: S,
    settings: CollectorSettings,
}

impl<S: ReleaseSearch> Collector<S> {
    pub fn new(search: S, settings: CollectorSettings) -> Self {
        Self { search, settings }
    }

    #[cfg(test)]
    pub fn search(&self) -> &S {
        &self.search
    }

    /// Page through the catalog until `target` unique barcodes are held,
    /// the catalog runs dry, the depth limit is hit, or a fatal error occurs.
    pub async fn collect(&self, target: usize) -> CollectionReport {
        let settings = &self.settings;
        let mut barcodes = BarcodeSet::new();
        let mut page = PageRequest::first(settings.page_size);
        let mut pages_fetched = 0;
        let mut transient_errors = 0;
        let mut failed_attempts = 0;

        tracing::info!("Starting fetch for {} barcodes", target);

        let stop_reason = loop {
            if barcodes.len() >= target {
                break StopReason::Sufficient;
            }

            match self.search.search_releases(&settings.query, page).await {
                Ok(result) => {
                    failed_attempts = 0;

                    if result.is_empty() {
                        tracing::info!("No more releases found at offset {}", page.offset);
                        break StopReason::Exhausted;
                    }

                    if pages_fetched == 0
                        && let Some(total) = result.total
                    {
                        tracing::debug!("Catalog reports {} matching releases", total);
                    }

                    pages_fetched += 1;
                    let mut new_found = 0;
                    for release in &result.releases {
                        if barcodes.offer(release.barcode.as_deref()) {
                            new_found += 1;
                        } else {
                            tracing::trace!(
                                "Release {} ({}) added nothing: barcode {:?}",
                                release.id,
                                release.title,
                                release.barcode
                            );
                        }
                    }
                    tracing::info!(
                        "Offset {}: Found {} new barcodes. Total unique: {}",
                        page.offset,
                        new_found,
                        barcodes.len()
                    );

                    page = page.advance();
                    tokio::time::sleep(settings.page_delay).await;
                }
                Err(e) if e.is_fatal() => {
                    tracing::error!("Request at offset {} failed: {}", page.offset, e);
                    break StopReason::Fatal(e);
                }
                Err(e) => {
                    transient_errors += 1;
                    failed_attempts += 1;
                    tracing::warn!("Request at offset {} failed: {}", page.offset, e);
                    tokio::time::sleep(settings.error_delay).await;

                    if self.give_up_on_page(failed_attempts) {
                        page = page.advance();
                        failed_attempts = 0;
                    }
                }
            }

            if page.offset > settings.max_offset && barcodes.len() < target {
                tracing::warn!(
                    "Giving up searching deeper at offset {} ({} of {} found)",
                    page.offset,
                    barcodes.len(),
                    target
                );
                break StopReason::SafetyLimit {
                    offset: page.offset,
                };
            }
        };

        CollectionReport {
            barcodes,
            stop_reason,
            pages_fetched,
            transient_errors,
        }
    }

    fn give_up_on_page(&self, failed_attempts: u32) -> bool {
        match self.settings.on_transient_error {
            TransientErrorPolicy::SkipPage => true,
            TransientErrorPolicy::RetryPage { max_attempts } => failed_attempts >= max_attempts,
        }
    }
}

/// Summary of a full collect-and-write run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub written: usize,
    pub path: PathBuf,
    pub stop_reason: StopReason,
    pub transient_errors: u32,
}

/// Collect up to `target` barcodes and write them to `path`.
///
/// The file is written whatever the stop reason, possibly empty.
pub async fn run<S: ReleaseSearch>(
    search: S,
    settings: CollectorSettings,
    target: usize,
    path: &Path,
) -> Result<RunSummary> {
    let report = Collector::new(search, settings).collect(target).await;
    tracing::info!(
        "Collection stopped: {} ({} unique barcodes from {} pages)",
        report.stop_reason,
        report.barcodes.len(),
        report.pages_fetched
    );
    if report.barcodes.is_empty() {
        tracing::warn!("No barcodes collected, writing an empty file");
    }

    let written = output::write_barcodes(path, &report.barcodes, target)?;
    tracing::info!("Successfully wrote {} barcodes to {:?}", written, path);

    Ok(RunSummary {
        written,
        path: path.to_path_buf(),
        stop_reason: report.stop_reason,
        transient_errors: report.transient_errors,
    })
}

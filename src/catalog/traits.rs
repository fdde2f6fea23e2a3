//! Trait definition for the catalog search capability.
//!
//! The collector is generic over [`ReleaseSearch`] so tests can drive it
//! with scripted pages instead of the live web service.
//!
//! # Example
//!
//! ```ignore
//! use barcode_collector::catalog::traits::ReleaseSearch;
//!
//! // In production code:
//! async fn first_page<S: ReleaseSearch>(search: &S, query: &SearchQuery) {
//!     let page = search.search_releases(query, PageRequest::first(100)).await?;
//! }
//!
//! // In tests:
//! let search = ScriptedSearch::new().page(0, releases);
//! ```

use async_trait::async_trait;

use super::domain::{CatalogError, PageRequest, ReleasePage};
use super::query::SearchQuery;

/// Paged release search.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ReleaseSearch: Send + Sync {
    /// Fetch one page of releases matching `query`.
    async fn search_releases(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<ReleasePage, CatalogError>;
}

#[async_trait]
impl ReleaseSearch for super::musicbrainz::MusicBrainzClient {
    async fn search_releases(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<ReleasePage, CatalogError> {
        self.search_releases(query, page).await
    }
}

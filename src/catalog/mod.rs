//! Catalog search - pages through release search results on an external service.
//!
//! # Architecture
//!
//! Same separation the rest of the crate relies on:
//! - **Domain models** (`domain.rs`) - Release, page cursor, errors
//! - **Query** (`query.rs`) - The search predicate we send
//! - **API DTOs** (`musicbrainz/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the MusicBrainz web service
//! - **Traits** (`traits.rs`) - The injectable search capability
//!
//! # Usage
//!
//! ```ignore
//! use catalog::{MusicBrainzClient, PageRequest, SearchQuery};
//!
//! let client = MusicBrainzClient::new(&config.search)?;
//! let page = client.search_releases(&SearchQuery::default(), PageRequest::first(100)).await?;
//! println!("{} releases", page.releases.len());
//! ```

pub mod domain;
pub mod musicbrainz;
pub mod query;
pub mod traits;

pub use domain::{CatalogError, PageRequest, Release, ReleasePage};
pub use musicbrainz::MusicBrainzClient;
pub use query::SearchQuery;
pub use traits::ReleaseSearch;

//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz release search returns.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! We only use `/release/?query=...`; a search response carries paging
//! metadata plus a `releases` array. Only a handful of release fields are
//! modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// Release search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Server timestamp of the search
    pub created: Option<String>,
    /// Total number of hits for the query
    pub count: Option<u64>,
    /// Offset of this page
    pub offset: Option<u64>,
    /// Releases on this page (missing or null past the end of the results)
    #[serde(default)]
    pub releases: Option<Vec<ReleaseDto>>,
}

/// Release as it appears in search results
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseDto {
    /// MusicBrainz release ID
    #[serde(default)]
    pub id: String,
    /// Search relevance (0-100)
    pub score: Option<u32>,
    /// Release title
    #[serde(default)]
    pub title: String,
    /// Release status (Official, Bootleg, etc.)
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// UPC/EAN barcode; empty string means "known to have no barcode"
    pub barcode: Option<String>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

//! Internal domain models for catalog search.
//!
//! These types are OUR types - they don't change when the catalog API changes.
//! All external API responses get converted into these types via adapters.

/// Offset/limit cursor for one page of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first result on the page
    pub offset: u32,
    /// Maximum number of results on the page
    pub limit: u32,
}

impl PageRequest {
    /// The first page of a search with the given page size
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// The page immediately after this one
    pub fn advance(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

/// A release (specific published edition of a recording)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Release {
    /// Catalog release ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Barcode as reported by the catalog (may be empty or garbage)
    pub barcode: Option<String>,
}

/// One page of search results
#[derive(Debug, Clone, Default)]
pub struct ReleasePage {
    /// Releases on this page, in catalog order
    pub releases: Vec<Release>,
    /// Total number of hits reported by the catalog, if any
    pub total: Option<u64>,
}

impl ReleasePage {
    /// An empty page means the catalog has nothing more for this query
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

/// Errors that can occur while searching the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl CatalogError {
    /// Whether the collection loop must stop rather than retry.
    ///
    /// A non-success HTTP status is fatal; transport and decode failures
    /// are retried after a penalty delay.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Client(_))
    }
}

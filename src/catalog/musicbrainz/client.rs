//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.
//! Throttling is the caller's job; this client issues exactly one request per call.

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, PageRequest, ReleasePage};
use crate::catalog::query::SearchQuery;
use crate::config::SearchConfig;

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client from the `[search]` config section
    pub fn new(config: &SearchConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of releases matching `query`
    pub async fn search_releases(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<ReleasePage, CatalogError> {
        let response = self.send_search_request(query, page).await?;
        Ok(adapter::to_release_page(response))
    }

    fn search_url(&self, query: &SearchQuery, page: PageRequest) -> String {
        format!(
            "{}/release/?query={}&limit={}&offset={}&fmt=json",
            self.base_url,
            urlencoding::encode(&query.to_lucene()),
            page.limit,
            page.offset
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(
        &self,
        query: &SearchQuery,
        page: PageRequest,
    ) -> Result<dto::SearchResponse, CatalogError> {
        let url = self.search_url(query, page);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Try to parse error response
            let reason = match response.json::<dto::ApiError>().await {
                Ok(error) => error.error,
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(CatalogError::Status {
                code: status.as_u16(),
                reason,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        serde_json::from_slice::<dto::SearchResponse>(&body)
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

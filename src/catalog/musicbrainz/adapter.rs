//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::catalog::domain::{Release, ReleasePage};

/// Convert a search response into a page of domain releases
pub fn to_release_page(response: dto::SearchResponse) -> ReleasePage {
    ReleasePage {
        releases: response
            .releases
            .unwrap_or_default()
            .into_iter()
            .map(to_release)
            .collect(),
        total: response.count,
    }
}

fn to_release(dto: dto::ReleaseDto) -> Release {
    Release {
        id: dto.id,
        title: dto.title,
        barcode: dto.barcode,
    }
}

//! Search predicate for the release index.
//!
//! MusicBrainz search uses Lucene syntax. We only ever combine a handful of
//! field predicates with `AND`, so the builder stays deliberately tiny.

use crate::config::SearchConfig;

/// Field predicates combined into one search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Genre/tag the release must carry (e.g. "rock")
    pub tag: Option<String>,
    /// Medium format (e.g. "CD")
    pub format: Option<String>,
    /// Only match releases that have a barcode at all
    pub require_barcode: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            tag: Some("rock".to_string()),
            format: Some("CD".to_string()),
            require_barcode: true,
        }
    }
}

impl SearchQuery {
    /// Build the query from the `[search]` config section
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            tag: non_blank(&config.tag),
            format: non_blank(&config.format),
            require_barcode: config.require_barcode,
        }
    }

    /// Render as a Lucene query string, e.g. `tag:rock AND format:CD AND barcode:*`
    pub fn to_lucene(&self) -> String {
        let mut clauses = Vec::with_capacity(3);

        if let Some(tag) = &self.tag {
            clauses.push(format!("tag:{}", quote_term(tag)));
        }
        if let Some(format) = &self.format {
            clauses.push(format!("format:{}", quote_term(format)));
        }
        if self.require_barcode {
            clauses.push("barcode:*".to_string());
        }

        if clauses.is_empty() {
            return "*".to_string();
        }
        clauses.join(" AND ")
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Multi-word terms must be phrase-quoted or Lucene splits them
fn quote_term(term: &str) -> String {
    if term.chars().any(char::is_whitespace) {
        format!("\"{}\"", term.replace('"', "\\\""))
    } else {
        term.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        assert_eq!(
            SearchQuery::default().to_lucene(),
            "tag:rock AND format:CD AND barcode:*"
        );
    }

    #[test]
    fn test_multi_word_tag_is_quoted() {
        let query = SearchQuery {
            tag: Some("hard rock".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.to_lucene(),
            "tag:\"hard rock\" AND format:CD AND barcode:*"
        );
    }

    #[test]
    fn test_omitted_predicates() {
        let query = SearchQuery {
            tag: None,
            format: Some("Vinyl".to_string()),
            require_barcode: false,
        };
        assert_eq!(query.to_lucene(), "format:Vinyl");

        let empty = SearchQuery {
            tag: None,
            format: None,
            require_barcode: false,
        };
        assert_eq!(empty.to_lucene(), "*");
    }

    #[test]
    fn test_from_config_treats_blank_as_absent() {
        let config = SearchConfig {
            tag: "  ".to_string(),
            format: "CD".to_string(),
            ..Default::default()
        };
        let query = SearchQuery::from_config(&config);
        assert_eq!(query.tag, None);
        assert_eq!(query.format.as_deref(), Some("CD"));
        assert!(query.require_barcode);
    }

    #[test]
    fn test_from_default_config_matches_default_query() {
        assert_eq!(
            SearchQuery::from_config(&SearchConfig::default()),
            SearchQuery::default()
        );
    }
}

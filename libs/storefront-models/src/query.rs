//! Search query rules
//!
//! The limits here are the defaults the server ships with; the server can
//! override them through configuration and passes its values into the
//! `*_with` constructors.

use crate::error::{Error, Result};

/// Results per page when the client does not ask for a size.
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page a search request may ask for.
pub const MAX_LIMIT: usize = 50;
pub const DEFAULT_OFFSET: usize = 0;

pub const QUERY_MIN_LENGTH: usize = 1;
pub const QUERY_MAX_LENGTH: usize = 100;

pub const SUGGESTIONS_DEFAULT_LIMIT: usize = 6;
pub const SUGGESTIONS_MAX_LIMIT: usize = 20;
pub const SUGGESTIONS_MIN_QUERY_LENGTH: usize = 2;

/// Normalize a query for index lookups: trimmed and lowercased.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A search term accepted by the search endpoint.
///
/// Keeps the trimmed text as the user typed it (echoed back in responses)
/// and exposes the normalized form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn parse(query: &str) -> Result<Self> {
        Self::parse_with(query, QUERY_MAX_LENGTH)
    }

    /// Validate against an explicit maximum length (in characters, before trimming).
    pub fn parse_with(query: &str, max_length: usize) -> Result<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidQuery("Query cannot be empty".to_string()));
        }
        if query.chars().count() > max_length {
            return Err(Error::InvalidQuery(format!(
                "Query too long (max {} characters)",
                max_length
            )));
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn normalized(&self) -> String {
        normalize(&self.text)
    }
}

/// A prefix typed into an autocomplete box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    text: String,
}

impl SuggestionQuery {
    pub fn parse(query: &str) -> Result<Self> {
        Self::parse_with(query, SUGGESTIONS_MIN_QUERY_LENGTH, QUERY_MAX_LENGTH)
    }

    pub fn parse_with(query: &str, min_length: usize, max_length: usize) -> Result<Self> {
        let trimmed = query.trim();
        if trimmed.chars().count() < min_length {
            return Err(Error::InvalidQuery(format!(
                "Query must be at least {} characters",
                min_length
            )));
        }
        if query.chars().count() > max_length {
            return Err(Error::InvalidQuery(format!(
                "Query too long (max {} characters)",
                max_length
            )));
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_trims_and_keeps_case() {
        let q = SearchQuery::parse("  iPhone 13 ").unwrap();
        assert_eq!(q.as_str(), "iPhone 13");
        assert_eq!(q.normalized(), "iphone 13");
    }

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(
            SearchQuery::parse("   "),
            Err(Error::InvalidQuery("Query cannot be empty".to_string()))
        );
        assert!(SearchQuery::parse("").is_err());
    }

    #[test]
    fn long_query_is_rejected() {
        let at_limit = "a".repeat(QUERY_MAX_LENGTH);
        assert!(SearchQuery::parse(&at_limit).is_ok());
        let over = "a".repeat(QUERY_MAX_LENGTH + 1);
        assert!(matches!(SearchQuery::parse(&over), Err(Error::InvalidQuery(_))));
        assert!(SearchQuery::parse_with("abcdef", 5).is_err());
    }

    #[test]
    fn suggestions_need_two_characters() {
        assert!(SuggestionQuery::parse("i").is_err());
        assert!(SuggestionQuery::parse(" i ").is_err());
        assert_eq!(SuggestionQuery::parse(" ip ").unwrap().as_str(), "ip");
    }
}

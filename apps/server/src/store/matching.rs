//! Keyword resolution over the search index
//!
//! Resolution order for a query:
//! 1. Exact keyword match on the normalized query
//! 2. Fuzzy match (when enabled), walking entries in insertion order. For
//!    each entry, first test keyword containment in either direction, then
//!    whether any product title contains the query. The first entry that
//!    matches either way wins; a title match returns only the matching
//!    products of that entry.
//! 3. No match: an empty set
//!
//! All checks are plain substring tests; no scoring or reordering happens.

use std::borrow::Cow;
use storefront_models::Product;

use super::SearchIndexEntry;

/// How a query was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Keyword,
    Title,
    NoMatch,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Keyword => "keyword",
            MatchKind::Title => "title",
            MatchKind::NoMatch => "none",
        }
    }
}

/// The full result set a query resolves to, before pagination
#[derive(Debug, Clone)]
pub struct ResolvedSet<'a> {
    pub kind: MatchKind,
    /// Keyword of the index entry the set came from
    pub keyword: Option<&'a str>,
    pub products: Cow<'a, [Product]>,
}

impl ResolvedSet<'_> {
    fn empty() -> Self {
        Self {
            kind: MatchKind::NoMatch,
            keyword: None,
            products: Cow::Borrowed(&[]),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Resolve an already-normalized query against the index entries.
pub fn resolve<'a>(entries: &'a [SearchIndexEntry], query: &str, fuzzy: bool) -> ResolvedSet<'a> {
    if let Some(entry) = entries.iter().find(|e| e.keyword == query) {
        return ResolvedSet {
            kind: MatchKind::Exact,
            keyword: Some(&entry.keyword),
            products: Cow::Borrowed(&entry.products),
        };
    }

    if !fuzzy {
        return ResolvedSet::empty();
    }

    for entry in entries {
        if entry.keyword.contains(query) || query.contains(entry.keyword.as_str()) {
            return ResolvedSet {
                kind: MatchKind::Keyword,
                keyword: Some(&entry.keyword),
                products: Cow::Borrowed(&entry.products),
            };
        }

        let matching: Vec<Product> = entry
            .products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(query))
            .cloned()
            .collect();
        if !matching.is_empty() {
            return ResolvedSet {
                kind: MatchKind::Title,
                keyword: Some(&entry.keyword),
                products: Cow::Owned(matching),
            };
        }
    }

    ResolvedSet::empty()
}

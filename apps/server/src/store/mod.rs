//! In-memory catalog
//!
//! The catalog is built once at startup from fixtures and never mutated.
//! It holds two read-only indexes: search keyword to an ordered result set,
//! and product ID to the full detail record.

pub mod fixtures;
pub mod matching;

use std::collections::HashMap;
use storefront_models::{paginate, query::normalize, Paging, Product, ProductId, SearchResult};

pub use matching::{resolve, MatchKind, ResolvedSet};

/// A search keyword and its result set, in the order the fixture lists them.
#[derive(Debug, Clone)]
pub struct SearchIndexEntry {
    pub keyword: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    /// Insertion order matters: fuzzy matching takes the first hit.
    entries: Vec<SearchIndexEntry>,
    details: HashMap<String, Product>,
}

impl CatalogStore {
    pub fn new(entries: Vec<SearchIndexEntry>, details: HashMap<String, Product>) -> Self {
        Self { entries, details }
    }

    pub fn entries(&self) -> &[SearchIndexEntry] {
        &self.entries
    }

    pub fn dataset_count(&self) -> usize {
        self.entries.len()
    }

    pub fn detail_count(&self) -> usize {
        self.details.len()
    }

    /// Resolve `query` to its full result set.
    pub fn resolve(&self, query: &str, fuzzy: bool) -> ResolvedSet<'_> {
        resolve(&self.entries, &normalize(query), fuzzy)
    }

    /// Resolve `query` and cut out the page at `offset`.
    ///
    /// `limit` must be at least 1. An empty result set reports offset 0
    /// regardless of the requested offset.
    pub fn search(
        &self,
        query: &str,
        limit: usize,
        offset: usize,
        fuzzy: bool,
    ) -> storefront_models::Result<(SearchResult, MatchKind)> {
        let resolved = self.resolve(query, fuzzy);

        if resolved.is_empty() {
            let paging = Paging::new(0, 0, limit)?;
            return Ok((SearchResult::new(query, Vec::new(), paging), resolved.kind));
        }

        let (page, total) = paginate(&resolved.products, limit, offset);
        let paging = Paging::new(total, offset, limit)?;
        Ok((SearchResult::new(query, page, paging), resolved.kind))
    }

    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.details.get(id.as_str())
    }
}

//! One page of search results

use crate::paging::Paging;
use crate::product::{Condition, Product};

/// A page of products matching `query`, with paging metadata for the full set.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub query: String,
    pub products: Vec<Product>,
    pub paging: Paging,
}

impl SearchResult {
    pub fn new(query: impl Into<String>, products: Vec<Product>, paging: Paging) -> Self {
        Self {
            query: query.into(),
            products,
            paging,
        }
    }

    pub fn has_results(&self) -> bool {
        !self.products.is_empty()
    }

    /// Products on this page.
    pub fn result_count(&self) -> usize {
        self.products.len()
    }

    /// Products across all pages.
    pub fn total_results(&self) -> usize {
        self.paging.total()
    }

    // Filters and sorts apply to the current page only; paging is kept as-is.

    pub fn filter_by_condition(&self, condition: Condition) -> Self {
        self.retain(|p| p.condition == condition)
    }

    pub fn filter_by_free_shipping(&self) -> Self {
        self.retain(Product::has_free_shipping)
    }

    pub fn filter_by_discount(&self) -> Self {
        self.retain(Product::has_discount)
    }

    pub fn sorted_by_price_asc(&self) -> Self {
        let mut products = self.products.clone();
        products.sort_by(|a, b| a.price.cmp(&b.price));
        Self::new(self.query.clone(), products, self.paging)
    }

    pub fn sorted_by_price_desc(&self) -> Self {
        let mut products = self.products.clone();
        products.sort_by(|a, b| b.price.cmp(&a.price));
        Self::new(self.query.clone(), products, self.paging)
    }

    fn retain(&self, keep: impl Fn(&Product) -> bool) -> Self {
        let products = self.products.iter().filter(|p| keep(p)).cloned().collect();
        Self::new(self.query.clone(), products, self.paging)
    }
}

//! Product search
//!
//! Applies the query and paging rules, then delegates resolution and
//! pagination to the repository.

use crate::{config::SearchConfig, repository::ProductRepository, Error, Result};
use std::sync::Arc;
use storefront_models::{SearchQuery, SearchResult};

pub struct SearchService {
    repository: Arc<dyn ProductRepository>,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(repository: Arc<dyn ProductRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    /// Search products by free-text query
    ///
    /// `limit` defaults to `search.default_limit` and must lie in
    /// `[1, search.max_limit]`; `offset` defaults to 0. The query must be
    /// non-empty after trimming and no longer than `search.max_query_length`.
    pub async fn search_products(
        &self,
        query: &str,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<SearchResult> {
        let limit = limit.unwrap_or(self.config.default_limit);
        if limit < 1 || limit > self.config.max_limit {
            return Err(Error::Validation(format!(
                "limit must be between 1 and {}",
                self.config.max_limit
            )));
        }
        let offset = offset.unwrap_or(0);

        let query = SearchQuery::parse_with(query, self.config.max_query_length)?;
        if query.as_str().chars().count() < self.config.min_query_length {
            return Err(Error::InvalidSearchQuery(format!(
                "Query must be at least {} characters",
                self.config.min_query_length
            )));
        }

        tracing::info!(
            query = %query.as_str(),
            limit,
            offset,
            "Searching products"
        );

        self.repository
            .search(query.as_str(), limit, offset)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::repository;

    fn service() -> SearchService {
        SearchService::new(repository(), SearchConfig::default())
    }

    #[tokio::test]
    async fn defaults_to_first_page_of_ten() {
        let result = service().search_products("iphone", None, None).await.unwrap();
        assert_eq!(result.paging.limit(), 10);
        assert_eq!(result.paging.offset(), 0);
        assert_eq!(result.products.len(), result.paging.total().min(10));
    }

    #[tokio::test]
    async fn echoes_trimmed_query() {
        let result = service()
            .search_products("  iPhone  ", Some(2), None)
            .await
            .unwrap();
        assert_eq!(result.query, "iPhone");
        assert_eq!(result.products.len(), 2);
    }

    #[tokio::test]
    async fn rejects_empty_and_long_queries() {
        let service = service();
        let err = service.search_products("   ", None, None).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSearchQuery(_)));

        let long = "a".repeat(101);
        let err = service.search_products(&long, None, None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid search query: Query too long (max 100 characters)"
        );
    }

    #[tokio::test]
    async fn rejects_limit_out_of_range() {
        let service = service();
        for limit in [0, 51] {
            let err = service
                .search_products("iphone", Some(limit), None)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "limit={limit}");
        }
        assert!(service.search_products("iphone", Some(50), None).await.is_ok());
    }

    #[tokio::test]
    async fn offset_past_end_is_not_an_error() {
        let service = service();
        let total = service
            .search_products("iphone", None, None)
            .await
            .unwrap()
            .paging
            .total();
        let result = service
            .search_products("iphone", None, Some(total))
            .await
            .unwrap();
        assert!(result.products.is_empty());
        assert_eq!(result.paging.total(), total);
    }
}

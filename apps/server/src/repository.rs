//! Product repository
//!
//! [`ProductRepository`] is the seam between the services and the catalog
//! data. The only implementation, [`MockProductRepository`], serves the
//! in-memory fixtures and imitates a remote catalog: every call waits a
//! random delay and can optionally fail at a configured rate.

use crate::{config::MockConfig, store::CatalogStore, Error, Result};
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use storefront_models::{Product, ProductId, SearchResult};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Resolve `query` and return the page at `offset` (at most `limit` products).
    async fn search(&self, query: &str, limit: usize, offset: usize) -> Result<SearchResult>;

    /// Fetch the full record for `id`.
    ///
    /// # Errors
    /// * `ProductNotFound` - no record exists for the ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Product>;
}

pub struct MockProductRepository {
    store: Arc<CatalogStore>,
    mock: MockConfig,
    fuzzy_matching: bool,
}

impl MockProductRepository {
    pub fn new(store: Arc<CatalogStore>, mock: MockConfig, fuzzy_matching: bool) -> Self {
        Self {
            store,
            mock,
            fuzzy_matching,
        }
    }

    async fn simulate_latency(&self) -> Result<()> {
        let delay_ms = self.next_delay_ms();
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        if self.mock.error_simulation_enabled && self.roll_failure() {
            return Err(Error::Internal("Simulated catalog failure".to_string()));
        }
        Ok(())
    }

    fn next_delay_ms(&self) -> u64 {
        let (min, max) = (self.mock.delay_min_ms, self.mock.delay_max_ms);
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }

    fn roll_failure(&self) -> bool {
        let p = self.mock.error_probability.clamp(0.0, 1.0);
        rand::thread_rng().gen_bool(p)
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn search(&self, query: &str, limit: usize, offset: usize) -> Result<SearchResult> {
        self.simulate_latency().await?;

        let (result, kind) = self
            .store
            .search(query, limit, offset, self.fuzzy_matching)?;

        tracing::debug!(
            query = %query,
            match_kind = kind.as_str(),
            total = result.paging.total(),
            returned = result.products.len(),
            "Resolved search"
        );

        Ok(result)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Product> {
        self.simulate_latency().await?;

        self.store
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| Error::ProductNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    fn no_delay() -> MockConfig {
        MockConfig {
            delay_min_ms: 0,
            delay_max_ms: 0,
            error_simulation_enabled: false,
            error_probability: 0.0,
        }
    }

    fn repository(mock: MockConfig) -> MockProductRepository {
        let store = Arc::new(fixtures::load_embedded().unwrap());
        MockProductRepository::new(store, mock, true)
    }

    #[tokio::test]
    async fn search_returns_page() {
        let repo = repository(no_delay());
        let result = repo.search("iphone", 5, 0).await.unwrap();
        assert_eq!(result.products.len(), 5);
        assert!(result.paging.total() > 5);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let repo = repository(no_delay());
        let id = ProductId::parse("MLA999999").unwrap();
        let err = repo.find_by_id(&id).await.unwrap_err();
        assert!(matches!(err, Error::ProductNotFound(ref missing) if missing == "MLA999999"));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_within_configured_range() {
        let repo = repository(MockConfig {
            delay_min_ms: 200,
            delay_max_ms: 800,
            ..no_delay()
        });
        let start = tokio::time::Instant::now();
        repo.search("iphone", 1, 0).await.unwrap();
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(200), "{waited:?}");
        assert!(waited <= Duration::from_millis(801), "{waited:?}");
    }

    #[tokio::test]
    async fn simulated_failures_surface_as_internal_errors() {
        let repo = repository(MockConfig {
            error_simulation_enabled: true,
            error_probability: 1.0,
            ..no_delay()
        });
        let err = repo.search("iphone", 1, 0).await.unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn fixed_delay_when_range_is_empty() {
        let repo = repository(MockConfig {
            delay_min_ms: 50,
            delay_max_ms: 50,
            ..no_delay()
        });
        assert_eq!(repo.next_delay_ms(), 50);
    }
}

//! Autocomplete suggestions
//!
//! A suggestion lookup is a search for the first page only.

use crate::{config::SearchConfig, repository::ProductRepository, Error, Result};
use std::sync::Arc;
use storefront_models::{Product, SuggestionQuery};

pub struct SuggestionService {
    repository: Arc<dyn ProductRepository>,
    config: SearchConfig,
}

impl SuggestionService {
    pub fn new(repository: Arc<dyn ProductRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    pub async fn suggestions(&self, query: &str, limit: Option<usize>) -> Result<Vec<Product>> {
        let limit = limit.unwrap_or(self.config.suggestions_default_limit);
        if limit < 1 || limit > self.config.suggestions_max_limit {
            return Err(Error::Validation(format!(
                "limit must be between 1 and {}",
                self.config.suggestions_max_limit
            )));
        }

        let query = SuggestionQuery::parse_with(
            query,
            self.config.suggestions_min_query_length,
            self.config.max_query_length,
        )?;

        tracing::info!(query = %query.as_str(), limit, "Getting suggestions");

        let result = self.repository.search(query.as_str(), limit, 0).await?;
        Ok(result.products)
    }
}

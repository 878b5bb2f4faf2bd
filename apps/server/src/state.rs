//! Shared application state

use crate::{
    config::Config,
    repository::{MockProductRepository, ProductRepository},
    services::{ProductService, SearchService, SuggestionService},
    store::{fixtures, CatalogStore},
    Result,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_service: Arc<SearchService>,
    pub suggestion_service: Arc<SuggestionService>,
    pub product_service: Arc<ProductService>,
}

impl AppState {
    /// Build state over the catalog embedded in the binary.
    pub fn new(config: Config) -> Result<Self> {
        let store = fixtures::load_embedded()?;
        tracing::info!(
            datasets = store.dataset_count(),
            details = store.detail_count(),
            "Catalog loaded"
        );
        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: Config, store: Arc<CatalogStore>) -> Self {
        let repository: Arc<dyn ProductRepository> = Arc::new(MockProductRepository::new(
            store,
            config.mock.clone(),
            config.search.fuzzy_matching,
        ));
        Self::with_repository(config, repository)
    }

    /// Build state around any repository implementation.
    pub fn with_repository(
        config: Config,
        repository: Arc<dyn ProductRepository>,
    ) -> Self {
        let search_service = Arc::new(SearchService::new(
            repository.clone(),
            config.search.clone(),
        ));
        let suggestion_service = Arc::new(SuggestionService::new(
            repository.clone(),
            config.search.clone(),
        ));
        let product_service = Arc::new(ProductService::new(repository));

        Self {
            config: Arc::new(config),
            search_service,
            suggestion_service,
            product_service,
        }
    }
}

//! Product detail lookup

use crate::{repository::ProductRepository, Result};
use std::sync::Arc;
use storefront_models::{Product, ProductId};

pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// The ID format is checked before any lookup happens.
    pub async fn product_detail(&self, id: &str) -> Result<Product> {
        let id = ProductId::parse(id)?;
        tracing::info!(product_id = %id, "Getting product detail");
        self.repository.find_by_id(&id).await
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

/// Process-local product store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct ProductRepositoryInMemory {
    store: RwLock<HashMap<Uuid, Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let guard = self.store.read().await;
        let mut products: Vec<Product> = guard.values().cloned().collect();
        products.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let guard = self.store.read().await;
        guard.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut guard = self.store.write().await;
        if guard.contains_key(&product.id) {
            tracing::warn!(product_id = %product.id, "duplicate product id rejected");
            return Err(RepositoryError::Duplicated);
        }
        guard.insert(product.id, product.clone());
        tracing::debug!(product_id = %product.id, total = guard.len(), "product stored");
        Ok(())
    }
}

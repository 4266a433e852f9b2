use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductPatch;
use business::domain::shared::value_objects::ProductId;

/// Process-local product store.
///
/// Records live in a `Vec` so listing preserves insertion order; lookups are
/// linear scans by id. Every operation holds the lock for its whole duration,
/// which makes each call atomic with respect to the others.
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Starts from an existing set of records, e.g. the seed catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|product| product.id == *id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        if products.iter().any(|existing| existing.id == product.id) {
            tracing::warn!(id = %product.id, "rejecting duplicated product id");
            return Err(RepositoryError::Duplicated);
        }
        products.push(product.clone());
        tracing::debug!(id = %product.id, total = products.len(), "product inserted");
        Ok(())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|product| product.id == *id)
            .ok_or(RepositoryError::NotFound)?;
        product.apply(patch);
        tracing::debug!(id = %id, "product updated");
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|product| product.id == *id)
            .ok_or(RepositoryError::NotFound)?;
        let removed = products.remove(index);
        tracing::debug!(id = %id, total = products.len(), "product deleted");
        Ok(removed)
    }
}

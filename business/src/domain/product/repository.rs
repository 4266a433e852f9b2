use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;
use super::value_objects::ProductPatch;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Appends a new product. Fails with `Duplicated` if the id is already taken.
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Applies `patch` in place and returns the product as stored afterwards.
    async fn update(&self, id: &ProductId, patch: &ProductPatch)
    -> Result<Product, RepositoryError>;
    /// Removes the product and returns it.
    async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError>;
}

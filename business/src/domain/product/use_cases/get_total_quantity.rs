use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait GetTotalQuantityUseCase: Send + Sync {
    /// Sum of the quantities of every product, 0 for an empty catalog.
    async fn execute(&self) -> Result<i64, ProductError>;
}

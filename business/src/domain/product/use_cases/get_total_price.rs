use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductTotalPriceParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductTotalPriceUseCase: Send + Sync {
    /// `price * quantity` of a single product.
    async fn execute(&self, params: GetProductTotalPriceParams) -> Result<f64, ProductError>;
}

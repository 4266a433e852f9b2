use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}

use async_graphql::{ID, SimpleObject};

use business::domain::product::model::Product;

/// A product of the catalog.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductObject {
    /// Unique identifier, assigned on creation
    pub id: ID,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
}

impl From<Product> for ProductObject {
    fn from(product: Product) -> Self {
        Self {
            id: ID(product.id.to_string()),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

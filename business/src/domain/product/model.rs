use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::{ProductPatch, validate_name, validate_price, validate_quantity};
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    /// Builds a product with a freshly generated id.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_name(&props.name)?;
        validate_price(props.price)?;
        validate_quantity(props.quantity)?;

        Ok(Self {
            id: ProductId::generate(),
            name: props.name,
            price: props.price,
            quantity: props.quantity,
        })
    }

    /// Constructor for data already held by the repository (no validation).
    pub fn from_repository(id: ProductId, name: String, price: f64, quantity: i32) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
        }
    }

    /// Value of the stock on hand: `price * quantity`.
    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Overwrites the fields present in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

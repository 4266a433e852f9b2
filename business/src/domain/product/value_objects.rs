use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Fields supplied to a partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }

    /// Checks the supplied fields against the same rules enforced on creation.
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

pub(crate) fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::PriceInvalid);
    }
    Ok(())
}

pub(crate) fn validate_quantity(quantity: i32) -> Result<(), ProductError> {
    if quantity < 0 {
        return Err(ProductError::QuantityNegative);
    }
    Ok(())
}

/// Decides which supplied fields of a [`ProductPatch`] are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Empty names and zero prices or quantities count as "not supplied".
    #[default]
    Truthy,
    /// Every supplied field is applied, zeroes included.
    Presence,
}

impl UpdatePolicy {
    /// Returns the patch that is actually applied under this policy.
    pub fn effective(&self, patch: ProductPatch) -> ProductPatch {
        match self {
            UpdatePolicy::Presence => patch,
            UpdatePolicy::Truthy => ProductPatch {
                name: patch.name.filter(|name| !name.is_empty()),
                price: patch.price.filter(|price| *price != 0.0 && !price.is_nan()),
                quantity: patch.quantity.filter(|quantity| *quantity != 0),
            },
        }
    }
}

impl std::fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdatePolicy::Truthy => write!(f, "truthy"),
            UpdatePolicy::Presence => write!(f, "presence"),
        }
    }
}

impl std::str::FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truthy" => Ok(UpdatePolicy::Truthy),
            "presence" => Ok(UpdatePolicy::Presence),
            _ => Err(format!("Invalid update policy: {}", s)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.quantity_negative")]
    QuantityNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("{0}")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

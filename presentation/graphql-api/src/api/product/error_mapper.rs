use async_graphql::Error;

use business::domain::product::errors::ProductError;

use crate::api::error::{IntoGraphQLError, graphql_error};

impl IntoGraphQLError for ProductError {
    fn into_graphql_error(self) -> Error {
        match &self {
            ProductError::NameEmpty => graphql_error("ValidationError", "product.name_empty"),
            ProductError::PriceInvalid => {
                graphql_error("ValidationError", "product.price_invalid")
            }
            ProductError::QuantityNegative => {
                graphql_error("ValidationError", "product.quantity_negative")
            }
            ProductError::NotFound => graphql_error("NotFound", "product.not_found"),
            ProductError::Repository(_) => {
                tracing::error!(error = %self, "repository failure");
                graphql_error("InternalError", "repository.persistence")
            }
        }
    }
}

/// Lookups that miss resolve to `null` instead of an error.
pub trait NullOnNotFound<T> {
    fn null_on_not_found(self) -> async_graphql::Result<Option<T>>;
}

impl<T> NullOnNotFound<T> for Result<T, ProductError> {
    fn null_on_not_found(self) -> async_graphql::Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(ProductError::NotFound) => Ok(None),
            Err(err) => Err(err.into_graphql_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_turn_not_found_into_null() {
        let result: Result<u8, ProductError> = Err(ProductError::NotFound);
        assert!(matches!(result.null_on_not_found(), Ok(None)));
    }

    #[test]
    fn should_keep_found_value() {
        let result: Result<u8, ProductError> = Ok(7);
        assert!(matches!(result.null_on_not_found(), Ok(Some(7))));
    }

    #[test]
    fn should_expose_validation_code() {
        let error = ProductError::PriceInvalid.into_graphql_error();
        assert_eq!(error.message, "product.price_invalid");
    }

    #[test]
    fn should_hide_repository_details() {
        let result: Result<u8, ProductError> =
            Err(ProductError::Repository(RepositoryError::Duplicated));
        let error = result.null_on_not_found().unwrap_err();
        assert_eq!(error.message, "repository.persistence");
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_total_price::{
    GetProductTotalPriceParams, GetProductTotalPriceUseCase,
};

pub struct GetProductTotalPriceUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductTotalPriceUseCase for GetProductTotalPriceUseCaseImpl {
    async fn execute(&self, params: GetProductTotalPriceParams) -> Result<f64, ProductError> {
        self.logger
            .info(&format!("Computing total price of product: {}", params.id));

        let product = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        Ok(product.total_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductPatch;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_multiply_price_by_quantity() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Product::from_repository(
                id.clone(),
                "Apple".to_string(),
                3.99,
                2,
            ))
        });

        let use_case = GetProductTotalPriceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let total = use_case
            .execute(GetProductTotalPriceParams {
                id: ProductId::new("1"),
            })
            .await
            .unwrap();

        assert!((total - 7.98).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductTotalPriceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductTotalPriceParams {
                id: ProductId::new("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}

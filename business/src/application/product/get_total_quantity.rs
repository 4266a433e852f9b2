use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_total_quantity::GetTotalQuantityUseCase;

pub struct GetTotalQuantityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTotalQuantityUseCase for GetTotalQuantityUseCaseImpl {
    async fn execute(&self) -> Result<i64, ProductError> {
        self.logger.info("Computing total quantity of products");

        let total = self
            .repository
            .get_all()
            .await?
            .iter()
            .map(|product| i64::from(product.quantity))
            .sum();

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductPatch;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;
    use proptest::prelude::*;

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

    fn use_case_over(quantities: Vec<i32>) -> GetTotalQuantityUseCaseImpl {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(move || {
            Ok(quantities
                .iter()
                .enumerate()
                .map(|(i, quantity)| {
                    Product::from_repository(
                        ProductId::new(i.to_string()),
                        format!("Product {}", i),
                        1.0,
                        *quantity,
                    )
                })
                .collect())
        });

        GetTotalQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_sum_quantities_of_seeded_catalog() {
        let use_case = use_case_over(vec![2, 3, 4, 5, 2]);
        assert_eq!(use_case.execute().await.unwrap(), 16);
    }

    #[tokio::test]
    async fn should_return_zero_for_empty_catalog() {
        let use_case = use_case_over(vec![]);
        assert_eq!(use_case.execute().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_not_overflow_on_large_quantities() {
        let use_case = use_case_over(vec![i32::MAX, i32::MAX]);
        assert_eq!(use_case.execute().await.unwrap(), 2 * i64::from(i32::MAX));
    }

    proptest! {
        #[test]
        fn total_equals_sum_of_quantities(quantities in proptest::collection::vec(0..10_000i32, 0..50)) {
            let expected: i64 = quantities.iter().map(|q| i64::from(*q)).sum();
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let total = runtime.block_on(use_case_over(quantities).execute()).unwrap();
            prop_assert_eq!(total, expected);
        }
    }
}

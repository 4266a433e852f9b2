use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;
use persistence::product::seed::default_catalog;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_total_price::GetProductTotalPriceUseCaseImpl;
use business::application::product::get_total_quantity::GetTotalQuantityUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::resolvers::{ProductMutation, ProductQuery};
use crate::api::schema::{ProductSchema, build_schema};
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub schema: ProductSchema,
}

impl DependencyContainer {
    /// Wires one repository instance into every use case; the schema owns it from here on.
    pub fn new(catalog: &CatalogConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(if catalog.seed {
            ProductRepositoryInMemory::with_products(default_catalog())
        } else {
            ProductRepositoryInMemory::new()
        });

        // Query use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_total_price_use_case = Arc::new(GetProductTotalPriceUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_total_quantity_use_case = Arc::new(GetTotalQuantityUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Mutation use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            policy: catalog.update_policy,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let query = ProductQuery::new(
            get_all_use_case,
            get_by_id_use_case,
            get_total_price_use_case,
            get_total_quantity_use_case,
        );
        let mutation = ProductMutation::new(create_use_case, update_use_case, delete_use_case);

        Self {
            health_api: HealthApi::new(),
            schema: build_schema(query, mutation),
        }
    }
}

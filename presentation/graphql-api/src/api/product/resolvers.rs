use std::sync::Arc;

use async_graphql::{ID, Object, Result};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_total_price::{
    GetProductTotalPriceParams, GetProductTotalPriceUseCase,
};
use business::domain::product::use_cases::get_total_quantity::GetTotalQuantityUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::IntoGraphQLError;
use crate::api::product::dto::ProductObject;
use crate::api::product::error_mapper::NullOnNotFound;

pub struct ProductQuery {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_total_price_use_case: Arc<dyn GetProductTotalPriceUseCase>,
    get_total_quantity_use_case: Arc<dyn GetTotalQuantityUseCase>,
}

impl ProductQuery {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_total_price_use_case: Arc<dyn GetProductTotalPriceUseCase>,
        get_total_quantity_use_case: Arc<dyn GetTotalQuantityUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_total_price_use_case,
            get_total_quantity_use_case,
        }
    }
}

#[Object]
impl ProductQuery {
    /// Every product, in the order it was added.
    async fn products(&self) -> Result<Vec<ProductObject>> {
        let products = self
            .get_all_use_case
            .execute()
            .await
            .map_err(IntoGraphQLError::into_graphql_error)?;
        Ok(products.into_iter().map(ProductObject::from).collect())
    }

    /// A single product, or null when the id is unknown.
    async fn product_by_id(&self, id: ID) -> Result<Option<ProductObject>> {
        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
            .null_on_not_found()?;
        Ok(product.map(ProductObject::from))
    }

    /// `price * quantity` of a product, or null when the id is unknown.
    async fn product_total_price(&self, id: ID) -> Result<Option<f64>> {
        self.get_total_price_use_case
            .execute(GetProductTotalPriceParams {
                id: ProductId::new(id.0),
            })
            .await
            .null_on_not_found()
    }

    /// Units in stock across the whole catalog.
    async fn total_quantity(&self) -> Result<i64> {
        self.get_total_quantity_use_case
            .execute()
            .await
            .map_err(IntoGraphQLError::into_graphql_error)
    }
}

pub struct ProductMutation {
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductMutation {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

#[Object]
impl ProductMutation {
    /// Adds a product with a freshly generated id.
    async fn add_product(&self, name: String, price: f64, quantity: i32) -> Result<ProductObject> {
        let product = self
            .create_use_case
            .execute(CreateProductParams {
                name,
                price,
                quantity,
            })
            .await
            .map_err(IntoGraphQLError::into_graphql_error)?;
        Ok(product.into())
    }

    /// Overwrites the supplied fields; null when the id is unknown.
    async fn update_product(
        &self,
        id: ID,
        name: Option<String>,
        price: Option<f64>,
        quantity: Option<i32>,
    ) -> Result<Option<ProductObject>> {
        let product = self
            .update_use_case
            .execute(UpdateProductParams {
                id: ProductId::new(id.0),
                name,
                price,
                quantity,
            })
            .await
            .null_on_not_found()?;
        Ok(product.map(ProductObject::from))
    }

    /// Removes a product and returns it; null when the id is unknown.
    async fn delete_product(&self, id: ID) -> Result<Option<ProductObject>> {
        let product = self
            .delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
            })
            .await
            .null_on_not_found()?;
        Ok(product.map(ProductObject::from))
    }
}

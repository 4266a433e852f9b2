use async_graphql::{EmptySubscription, Schema, extensions::Tracing};

use crate::api::product::resolvers::{ProductMutation, ProductQuery};

pub type ProductSchema = Schema<ProductQuery, ProductMutation, EmptySubscription>;

pub fn build_schema(query: ProductQuery, mutation: ProductMutation) -> ProductSchema {
    Schema::build(query, mutation, EmptySubscription)
        .extension(Tracing)
        .finish()
}

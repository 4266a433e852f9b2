pub mod error;
pub mod schema;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod resolvers;
}

pub mod product {
    pub mod repository;
    pub mod seed;
}

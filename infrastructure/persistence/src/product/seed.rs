use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

/// Catalog loaded at startup when seeding is enabled.
pub fn default_catalog() -> Vec<Product> {
    [
        ("1", "Apple", 3.99, 2),
        ("2", "Banana", 1.99, 3),
        ("3", "Orange", 2.00, 4),
        ("4", "Mango", 5.50, 5),
        ("5", "Watermelon", 8.99, 2),
    ]
    .into_iter()
    .map(|(id, name, price, quantity)| {
        Product::from_repository(ProductId::new(id), name.to_string(), price, quantity)
    })
    .collect()
}

//! Product aggregate
//!
//! Catalog items of the cosmetics store, scoped by category and brand.

pub mod model;
pub mod repository;

pub use model::{CreateProductDto, Product, ProductScope, UpdateProductDto};
pub use repository::ProductRepository;

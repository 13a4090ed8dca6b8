//! Application services for the catalog and ordering resources

pub mod order;
pub mod product;

pub use order::OrderService;
pub use product::ProductService;

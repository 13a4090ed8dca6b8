//! Order aggregate

pub mod model;
pub mod repository;

pub use model::{CreateOrderDto, Order, OrderItem, OrderScope, OrderStatus};
pub use repository::OrderRepository;

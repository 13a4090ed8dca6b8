//! Domain layer: aggregates and repository contracts

pub mod notification;
pub mod order;
pub mod product;
pub mod repositories;
pub mod user;

pub use notification::{DispatchResult, EmailIntent, ProviderEnvelope, Recipient, Sender};
pub use order::{
    CreateOrderDto, Order, OrderItem, OrderRepository, OrderScope, OrderStatus,
};
pub use product::{
    CreateProductDto, Product, ProductRepository, ProductScope, UpdateProductDto,
};
pub use repositories::{DomainResult, PagedRepository, RepositoryProvider};
pub use user::{CreateProfileDto, UpdateProfileDto, UserProfile, UserProfileRepository};

pub use crate::shared::errors::DomainError;

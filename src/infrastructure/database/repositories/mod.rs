//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod order_repository;
pub mod product_repository;
pub mod repository_provider;
pub mod user_profile_repository;

pub use order_repository::SeaOrmOrderRepository;
pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use user_profile_repository::SeaOrmUserProfileRepository;

use crate::domain::DomainError;
use crate::shared::errors::InfraError;
use crate::shared::pagination::SortDirection;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(InfraError::from(e).to_string())
}

fn order_for(direction: SortDirection) -> sea_orm::Order {
    match direction {
        SortDirection::Ascending => sea_orm::Order::Asc,
        SortDirection::Descending => sea_orm::Order::Desc,
    }
}

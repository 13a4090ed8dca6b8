//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{OrderRepository, ProductRepository, RepositoryProvider, UserProfileRepository};

use super::order_repository::SeaOrmOrderRepository;
use super::product_repository::SeaOrmProductRepository;
use super::user_profile_repository::SeaOrmUserProfileRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    products: SeaOrmProductRepository,
    orders: SeaOrmOrderRepository,
    user_profiles: SeaOrmUserProfileRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: SeaOrmProductRepository::new(db.clone()),
            orders: SeaOrmOrderRepository::new(db.clone()),
            user_profiles: SeaOrmUserProfileRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }

    fn user_profiles(&self) -> &dyn UserProfileRepository {
        &self.user_profiles
    }
}

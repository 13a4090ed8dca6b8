//! Order repository interface

use async_trait::async_trait;

use super::model::{Order, OrderScope, OrderStatus};
use crate::domain::{DomainResult, PagedRepository};

#[async_trait]
pub trait OrderRepository: PagedRepository<Item = Order, Scope = OrderScope> {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>>;
    async fn save(&self, order: Order) -> DomainResult<Order>;
    async fn update_status(&self, id: &str, status: OrderStatus) -> DomainResult<Option<Order>>;
    /// Returns `false` when no order had this id
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}

//! Order service

use std::sync::Arc;

use tracing::info;

use crate::application::listing::list_page;
use crate::domain::{
    CreateOrderDto, DomainError, DomainResult, Order, OrderScope, OrderStatus, RepositoryProvider,
};
use crate::shared::pagination::{PageParams, PaginatedResult};

pub struct OrderService {
    repos: Arc<dyn RepositoryProvider>,
}

impl OrderService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, dto: CreateOrderDto) -> DomainResult<Order> {
        if dto.items.is_empty() {
            return Err(DomainError::Validation("Order must contain at least one item".into()));
        }
        let order = self.repos.orders().save(Order::new(dto)).await?;
        info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = order.total_amount,
            "Order created"
        );
        Ok(order)
    }

    pub async fn get(&self, id: &str) -> DomainResult<Order> {
        self.repos
            .orders()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> DomainResult<Order> {
        let order = self
            .repos
            .orders()
            .update_status(id, status)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))?;
        info!(order_id = %id, status = %status, "Order status updated");
        Ok(order)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.repos.orders().delete(id).await? {
            return Err(DomainError::not_found("Order", id));
        }
        Ok(())
    }

    pub async fn list(&self, params: PageParams) -> DomainResult<PaginatedResult<Order>> {
        list_page(self.repos.orders(), params, None).await
    }

    pub async fn list_by_user(
        &self,
        user_id: &str,
        params: PageParams,
    ) -> DomainResult<PaginatedResult<Order>> {
        list_page(
            self.repos.orders(),
            params,
            Some(OrderScope::User(user_id.to_string())),
        )
        .await
    }
}

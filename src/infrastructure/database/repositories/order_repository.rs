//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{db_err, order_for};
use crate::domain::{
    DomainError, DomainResult, Order, OrderItem, OrderRepository, OrderScope, OrderStatus,
    PagedRepository,
};
use crate::infrastructure::database::entities::order;
use crate::shared::errors::InfraError;
use crate::shared::pagination::{PageRequest, PaginatedResult};

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: order::OrderStatus) -> OrderStatus {
    match status {
        order::OrderStatus::Pending => OrderStatus::Pending,
        order::OrderStatus::Confirmed => OrderStatus::Confirmed,
        order::OrderStatus::Shipped => OrderStatus::Shipped,
        order::OrderStatus::Delivered => OrderStatus::Delivered,
        order::OrderStatus::Cancelled => OrderStatus::Cancelled,
    }
}

fn domain_status_to_entity(status: OrderStatus) -> order::OrderStatus {
    match status {
        OrderStatus::Pending => order::OrderStatus::Pending,
        OrderStatus::Confirmed => order::OrderStatus::Confirmed,
        OrderStatus::Shipped => order::OrderStatus::Shipped,
        OrderStatus::Delivered => order::OrderStatus::Delivered,
        OrderStatus::Cancelled => order::OrderStatus::Cancelled,
    }
}

fn serialization_err(e: serde_json::Error) -> DomainError {
    DomainError::Storage(InfraError::from(e).to_string())
}

fn model_to_domain(model: order::Model) -> DomainResult<Order> {
    let items: Vec<OrderItem> =
        serde_json::from_str(&model.items_json).map_err(serialization_err)?;
    Ok(Order {
        id: model.id,
        user_id: model.user_id,
        items,
        total_amount: model.total_amount,
        status: entity_status_to_domain(model.status),
        shipping_address: model.shipping_address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn sort_column(field: &str) -> order::Column {
    match field {
        "totalAmount" | "total_amount" => order::Column::TotalAmount,
        "status" => order::Column::Status,
        "updatedAt" | "updated_at" => order::Column::UpdatedAt,
        _ => order::Column::CreatedAt,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl PagedRepository for SeaOrmOrderRepository {
    type Item = Order;
    type Scope = OrderScope;

    async fn find_page(
        &self,
        scope: Option<OrderScope>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<Order>> {
        let mut query = order::Entity::find();

        if let Some(OrderScope::User(user_id)) = scope {
            query = query.filter(order::Column::UserId.eq(user_id));
        }

        query = query
            .order_by(sort_column(&request.sort_field), order_for(request.sort_direction))
            .order_by_asc(order::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let models = query
            .offset(request.offset())
            .limit(request.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models
            .into_iter()
            .map(model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(PaginatedResult::new(items, total, request.page, request.limit))
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>> {
        order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn save(&self, order: Order) -> DomainResult<Order> {
        let items_json = serde_json::to_string(&order.items).map_err(serialization_err)?;
        let active = order::ActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            items_json: Set(items_json),
            total_amount: Set(order.total_amount),
            status: Set(domain_status_to_entity(order.status)),
            shipping_address: Set(order.shipping_address),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        };
        let saved = active.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> DomainResult<Option<Order>> {
        let Some(existing) = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let mut active: order::ActiveModel = existing.into();
        active.status = Set(domain_status_to_entity(status));
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(updated).map(Some)
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let result = order::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

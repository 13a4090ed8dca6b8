//! Order DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateOrderDto, Order, OrderItem};
use crate::shared::pagination::PaginatedResult;

/// Order line as sent and returned over the API
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    #[validate(length(min = 1, message = "productId is required"))]
    pub product_id: String,
    #[validate(length(min = 1, message = "productName is required"))]
    pub product_name: String,
    #[validate(range(min = 0.0, message = "unitPrice must not be negative"))]
    pub unit_price: f64,
    #[validate(range(exclusive_min = 0.0, message = "quantity must be positive"))]
    pub quantity: f64,
}

impl From<OrderItem> for OrderItemDto {
    fn from(i: OrderItem) -> Self {
        Self {
            product_id: i.product_id,
            product_name: i.product_name,
            unit_price: i.unit_price,
            quantity: i.quantity,
        }
    }
}

impl From<OrderItemDto> for OrderItem {
    fn from(i: OrderItemDto) -> Self {
        Self {
            product_id: i.product_id,
            product_name: i.product_name,
            unit_price: i.unit_price,
            quantity: i.quantity,
        }
    }
}

/// Order API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemDto>,
    pub total_amount: f64,
    /// PENDING, CONFIRMED, SHIPPED, DELIVERED or CANCELLED
    pub status: String,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            items: o.items.into_iter().map(OrderItemDto::from).collect(),
            total_amount: o.total_amount,
            status: o.status.to_string(),
            shipping_address: o.shipping_address,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// One page of orders
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListDto {
    pub orders: Vec<OrderDto>,
    pub total_pages: u64,
}

impl From<PaginatedResult<Order>> for OrderListDto {
    fn from(page: PaginatedResult<Order>) -> Self {
        let page = page.map(OrderDto::from);
        Self {
            orders: page.items,
            total_pages: page.total_pages,
        }
    }
}

/// Create order request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "an order needs at least one item"), nested)]
    pub items: Vec<OrderItemDto>,
    #[validate(length(min = 1, message = "shippingAddress is required"))]
    pub shipping_address: String,
}

impl From<CreateOrderRequest> for CreateOrderDto {
    fn from(r: CreateOrderRequest) -> Self {
        Self {
            user_id: r.user_id,
            items: r.items.into_iter().map(OrderItem::from).collect(),
            shipping_address: r.shipping_address,
        }
    }
}

/// Update order request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    /// New status, case-insensitive
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

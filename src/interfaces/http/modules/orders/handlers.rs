//! Order API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CreateOrderRequest, OrderDto, OrderListDto, UpdateOrderRequest};
use crate::application::OrderService;
use crate::domain::{DomainError, OrderStatus};
use crate::interfaces::http::common::{ApiError, ApiQuery, ApiResponse, ListParams, ValidatedJson};

#[derive(Clone)]
pub struct OrderHandlerState {
    pub service: Arc<OrderService>,
}

#[utoipa::path(
    post,
    path = "/order/create-order",
    tag = "Orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<OrderDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_order(
    State(state): State<OrderHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> Result<Json<ApiResponse<OrderDto>>, ApiError> {
    let order = state.service.create(request.into()).await?;
    Ok(Json(ApiResponse::success(order.into())))
}

#[utoipa::path(
    get,
    path = "/order/get-all-orders",
    tag = "Orders",
    params(ListParams),
    responses(
        (status = 200, description = "One page of orders", body = ApiResponse<OrderListDto>)
    )
)]
pub async fn list_orders(
    State(state): State<OrderHandlerState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<OrderListDto>>, ApiError> {
    let page = state.service.list(params.into()).await?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/order/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OrderDto>>, ApiError> {
    let order = state.service.get(&id).await?;
    Ok(Json(ApiResponse::success(order.into())))
}

#[utoipa::path(
    put,
    path = "/order/update-order/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderDto>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<OrderDto>>, ApiError> {
    let status: OrderStatus = request.status.parse().map_err(DomainError::Validation)?;
    let order = state.service.update_status(&id, status).await?;
    Ok(Json(ApiResponse::success(order.into())))
}

#[utoipa::path(
    delete,
    path = "/order/delete-order/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_order(
    State(state): State<OrderHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(ApiResponse::empty("Order deleted")))
}

#[utoipa::path(
    get,
    path = "/order/user/{userId}",
    tag = "Orders",
    params(
        ("userId" = String, Path, description = "Owning user ID"),
        ListParams
    ),
    responses(
        (status = 200, description = "Orders of the user", body = ApiResponse<OrderListDto>)
    )
)]
pub async fn list_orders_by_user(
    State(state): State<OrderHandlerState>,
    Path(user_id): Path<String>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<OrderListDto>>, ApiError> {
    let page = state.service.list_by_user(&user_id, params.into()).await?;
    Ok(Json(ApiResponse::success(page.into())))
}

//! Product API handlers
//!
//! Thin adapters over `ProductService`: extract, call, wrap in the envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    CreateProductRequest, ProductDto, ProductListDto, QuantityParams, UpdateProductRequest,
};
use crate::application::ProductService;
use crate::interfaces::http::common::{ApiError, ApiQuery, ApiResponse, ListParams, ValidatedJson};

#[derive(Clone)]
pub struct ProductHandlerState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    post,
    path = "/product/create-product",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductDto>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<ProductHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> Result<Json<ApiResponse<ProductDto>>, ApiError> {
    let product = state.service.create(request.into()).await?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    get,
    path = "/product/get-all-products",
    tag = "Products",
    params(ListParams),
    responses(
        (status = 200, description = "One page of products", body = ApiResponse<ProductListDto>)
    )
)]
pub async fn list_products(
    State(state): State<ProductHandlerState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<ProductListDto>>, ApiError> {
    let page = state.service.list(params.into()).await?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDto>>, ApiError> {
    let product = state.service.get(&id).await?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    put,
    path = "/product/update-product/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductDto>>, ApiError> {
    let product = state.service.update(&id, request.into()).await?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    delete,
    path = "/product/delete-product/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(ApiResponse::empty("Product deleted")))
}

#[utoipa::path(
    get,
    path = "/product/category/{categoryId}",
    tag = "Products",
    params(
        ("categoryId" = String, Path, description = "Category ID"),
        ListParams
    ),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse<ProductListDto>)
    )
)]
pub async fn list_products_by_category(
    State(state): State<ProductHandlerState>,
    Path(category_id): Path<String>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<ProductListDto>>, ApiError> {
    let page = state
        .service
        .list_by_category(&category_id, params.into())
        .await?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/product/brand/{brandId}",
    tag = "Products",
    params(
        ("brandId" = String, Path, description = "Brand ID"),
        ListParams
    ),
    responses(
        (status = 200, description = "Products of the brand", body = ApiResponse<ProductListDto>)
    )
)]
pub async fn list_products_by_brand(
    State(state): State<ProductHandlerState>,
    Path(brand_id): Path<String>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<ProductListDto>>, ApiError> {
    let page = state.service.list_by_brand(&brand_id, params.into()).await?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    put,
    path = "/product/{id}/quantity",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID"),
        QuantityParams
    ),
    responses(
        (status = 200, description = "Stock updated"),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_product_quantity(
    State(state): State<ProductHandlerState>,
    Path(id): Path<String>,
    ApiQuery(params): ApiQuery<QuantityParams>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.service.update_quantity(&id, params.new_quantity).await?;
    Ok(Json(ApiResponse::empty("Quantity updated")))
}

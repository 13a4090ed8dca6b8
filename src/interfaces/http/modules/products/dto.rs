//! Product DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{CreateProductDto, Product, UpdateProductDto};
use crate::shared::pagination::PaginatedResult;

/// Product API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: f64,
    pub category_id: String,
    pub brand_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            quantity: p.quantity,
            category_id: p.category_id,
            brand_id: p.brand_id,
            image_url: p.image_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// One page of products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListDto {
    pub products: Vec<ProductDto>,
    pub total_pages: u64,
}

impl From<PaginatedResult<Product>> for ProductListDto {
    fn from(page: PaginatedResult<Product>) -> Self {
        let page = page.map(ProductDto::from);
        Self {
            products: page.items,
            total_pages: page.total_pages,
        }
    }
}

/// Create product request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    #[serde(default)]
    pub quantity: f64,
    #[validate(length(min = 1, message = "categoryId is required"))]
    pub category_id: String,
    #[validate(length(min = 1, message = "brandId is required"))]
    pub brand_id: String,
    pub image_url: Option<String>,
}

impl From<CreateProductRequest> for CreateProductDto {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            quantity: r.quantity,
            category_id: r.category_id,
            brand_id: r.brand_id,
            image_url: r.image_url,
        }
    }
}

/// Update product request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, message = "categoryId must not be empty"))]
    pub category_id: Option<String>,
    #[validate(length(min = 1, message = "brandId must not be empty"))]
    pub brand_id: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdateProductRequest> for UpdateProductDto {
    fn from(r: UpdateProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            quantity: r.quantity,
            category_id: r.category_id,
            brand_id: r.brand_id,
            image_url: r.image_url,
        }
    }
}

/// `?newQuantity=`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct QuantityParams {
    /// New stock level
    pub new_quantity: f64,
}

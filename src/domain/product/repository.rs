//! Product repository interface

use async_trait::async_trait;

use super::model::{Product, ProductScope};
use crate::domain::{DomainResult, PagedRepository};

#[async_trait]
pub trait ProductRepository: PagedRepository<Item = Product, Scope = ProductScope> {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>>;
    async fn save(&self, product: Product) -> DomainResult<Product>;
    async fn update(&self, product: Product) -> DomainResult<Product>;
    async fn update_quantity(&self, id: &str, quantity: f64) -> DomainResult<Option<Product>>;
    /// Returns `false` when no product had this id
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}

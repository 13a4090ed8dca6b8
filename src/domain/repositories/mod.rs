//! Repository traits for the domain layer
//!
//! Contains:
//! - `PagedRepository`: the listing contract shared by every aggregate
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use async_trait::async_trait;

use super::order::OrderRepository;
use super::product::ProductRepository;
use super::user::UserProfileRepository;
use crate::shared::errors::DomainError;
use crate::shared::pagination::{PageRequest, PaginatedResult};

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// A collection that can be listed one page at a time, optionally narrowed
/// to the entities owned by a scope (category, brand, user...).
///
/// Implementations return the page slice together with the total page
/// count; callers never count rows themselves. A scope that matches
/// nothing yields an empty page with `total_pages == 0`.
#[async_trait]
pub trait PagedRepository: Send + Sync {
    type Item: Send;
    type Scope: Send;

    async fn find_page(
        &self,
        scope: Option<Self::Scope>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<Self::Item>>;
}

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let product = repos.products().find_by_id("p-1").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn products(&self) -> &dyn ProductRepository;
    fn orders(&self) -> &dyn OrderRepository;
    fn user_profiles(&self) -> &dyn UserProfileRepository;
}

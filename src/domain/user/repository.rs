use async_trait::async_trait;

use super::UserProfile;
use crate::domain::{DomainResult, PagedRepository};

/// Profiles are never scoped, hence `Scope = ()`.
#[async_trait]
pub trait UserProfileRepository: PagedRepository<Item = UserProfile, Scope = ()> {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<UserProfile>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserProfile>>;
    async fn save(&self, profile: UserProfile) -> DomainResult<UserProfile>;
    async fn update(&self, profile: UserProfile) -> DomainResult<UserProfile>;
    /// Returns `false` when no profile had this id
    async fn delete(&self, id: &str) -> DomainResult<bool>;
}

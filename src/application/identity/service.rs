//! User profile service, application-layer orchestration
//!
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::application::listing::list_page;
use crate::domain::{
    CreateProfileDto, DomainError, DomainResult, RepositoryProvider, UpdateProfileDto,
    UserProfile,
};
use crate::shared::pagination::{PageParams, PaginatedResult};

pub struct ProfileService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProfileService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a profile. Username and email must both be unused.
    pub async fn create(&self, dto: CreateProfileDto) -> DomainResult<UserProfile> {
        let profiles = self.repos.user_profiles();

        if profiles.find_by_username(&dto.username).await?.is_some() {
            return Err(DomainError::Conflict("Username already exists".into()));
        }
        if profiles.find_by_email(&dto.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let profile = profiles.save(UserProfile::new(dto)).await?;
        info!(profile_id = %profile.id, username = %profile.username, "Profile created");
        Ok(profile)
    }

    pub async fn get(&self, id: &str) -> DomainResult<UserProfile> {
        self.repos
            .user_profiles()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("UserProfile", id))
    }

    pub async fn update(&self, id: &str, dto: UpdateProfileDto) -> DomainResult<UserProfile> {
        let mut profile = self.get(id).await?;

        if let Some(email) = dto.email.as_deref() {
            if let Some(other) = self.repos.user_profiles().find_by_email(email).await? {
                if other.id != profile.id {
                    return Err(DomainError::Conflict("Email already exists".into()));
                }
            }
        }

        profile.apply(dto);
        self.repos.user_profiles().update(profile).await
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.repos.user_profiles().delete(id).await? {
            return Err(DomainError::not_found("UserProfile", id));
        }
        info!(profile_id = %id, "Profile deleted");
        Ok(())
    }

    pub async fn list(&self, params: PageParams) -> DomainResult<PaginatedResult<UserProfile>> {
        list_page(self.repos.user_profiles(), params, None).await
    }
}

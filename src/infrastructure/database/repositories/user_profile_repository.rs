//! SeaORM implementation of UserProfileRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{db_err, order_for};
use crate::domain::{DomainError, DomainResult, PagedRepository, UserProfile, UserProfileRepository};
use crate::infrastructure::database::entities::user_profile;
use crate::shared::pagination::{PageRequest, PaginatedResult};

pub struct SeaOrmUserProfileRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: user_profile::Model) -> UserProfile {
    UserProfile {
        id: model.id,
        username: model.username,
        email: model.email,
        name: model.name,
        gender: model.gender,
        age: model.age,
        occupation: model.occupation,
        dob: model.dob,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn domain_to_active(p: UserProfile) -> user_profile::ActiveModel {
    user_profile::ActiveModel {
        id: Set(p.id),
        username: Set(p.username),
        email: Set(p.email),
        name: Set(p.name),
        gender: Set(p.gender),
        age: Set(p.age),
        occupation: Set(p.occupation),
        dob: Set(p.dob),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

/// The unique constraints back up the service-level uniqueness checks
/// when two registrations race.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
        DomainError::Conflict("Username or email already exists".to_string())
    } else {
        db_err(e)
    }
}

fn sort_column(field: &str) -> user_profile::Column {
    match field {
        "username" => user_profile::Column::Username,
        "email" => user_profile::Column::Email,
        "name" => user_profile::Column::Name,
        "updatedAt" | "updated_at" => user_profile::Column::UpdatedAt,
        _ => user_profile::Column::CreatedAt,
    }
}

#[async_trait]
impl PagedRepository for SeaOrmUserProfileRepository {
    type Item = UserProfile;
    type Scope = ();

    async fn find_page(
        &self,
        _scope: Option<()>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<UserProfile>> {
        let query = user_profile::Entity::find()
            .order_by(sort_column(&request.sort_field), order_for(request.sort_direction))
            .order_by_asc(user_profile::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let models = query
            .offset(request.offset())
            .limit(request.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, request.page, request.limit))
    }
}

#[async_trait]
impl UserProfileRepository for SeaOrmUserProfileRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        let model = user_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<UserProfile>> {
        let model = user_profile::Entity::find()
            .filter(user_profile::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserProfile>> {
        let model = user_profile::Entity::find()
            .filter(user_profile::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        let saved = domain_to_active(profile)
            .insert(&self.db)
            .await
            .map_err(write_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        let updated = domain_to_active(profile)
            .update(&self.db)
            .await
            .map_err(write_err)?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let result = user_profile::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

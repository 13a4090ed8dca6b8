//! Profile DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{CreateProfileDto, UpdateProfileDto, UserProfile};
use crate::shared::pagination::PaginatedResult;

/// Profile API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub dob: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            username: p.username,
            email: p.email,
            name: p.name,
            gender: p.gender,
            age: p.age,
            occupation: p.occupation,
            dob: p.dob,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// One page of profiles
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListDto {
    pub profiles: Vec<ProfileDto>,
    pub total_pages: u64,
}

impl From<PaginatedResult<UserProfile>> for ProfileListDto {
    fn from(page: PaginatedResult<UserProfile>) -> Self {
        let page = page.map(ProfileDto::from);
        Self {
            profiles: page.items,
            total_pages: page.total_pages,
        }
    }
}

/// Create profile request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfileRequest {
    #[validate(length(min = 3, max = 50, message = "username must be 3 to 50 characters"))]
    pub username: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,
    pub occupation: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    pub dob: Option<NaiveDate>,
}

impl From<CreateProfileRequest> for CreateProfileDto {
    fn from(r: CreateProfileRequest) -> Self {
        Self {
            username: r.username,
            email: r.email,
            name: r.name,
            gender: r.gender,
            age: r.age,
            occupation: r.occupation,
            dob: r.dob,
        }
    }
}

/// Update profile request; the username cannot be changed
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl From<UpdateProfileRequest> for UpdateProfileDto {
    fn from(r: UpdateProfileRequest) -> Self {
        Self {
            email: r.email,
            name: r.name,
            gender: r.gender,
            age: r.age,
            occupation: r.occupation,
            dob: r.dob,
        }
    }
}

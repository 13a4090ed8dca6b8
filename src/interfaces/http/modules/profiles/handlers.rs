//! Profile API handlers
//!
//! Delegates to `ProfileService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{CreateProfileRequest, ProfileDto, ProfileListDto, UpdateProfileRequest};
use crate::application::ProfileService;
use crate::interfaces::http::common::{ApiError, ApiQuery, ApiResponse, ListParams, ValidatedJson};

#[derive(Clone)]
pub struct ProfileHandlerState {
    pub service: Arc<ProfileService>,
}

#[utoipa::path(
    post,
    path = "/identity/create-profile",
    tag = "Profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 200, description = "Profile created", body = ApiResponse<ProfileDto>),
        (status = 409, description = "Username or email already in use"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_profile(
    State(state): State<ProfileHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError> {
    let profile = state.service.create(request.into()).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    get,
    path = "/identity/get-all-profiles",
    tag = "Profiles",
    params(ListParams),
    responses(
        (status = 200, description = "One page of profiles", body = ApiResponse<ProfileListDto>)
    )
)]
pub async fn list_profiles(
    State(state): State<ProfileHandlerState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<ApiResponse<ProfileListDto>>, ApiError> {
    let page = state.service.list(params.into()).await?;
    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/identity/{id}",
    tag = "Profiles",
    params(("id" = String, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile details", body = ApiResponse<ProfileDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_profile(
    State(state): State<ProfileHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError> {
    let profile = state.service.get(&id).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    put,
    path = "/identity/update-profile/{id}",
    tag = "Profiles",
    params(("id" = String, Path, description = "Profile ID")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_profile(
    State(state): State<ProfileHandlerState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError> {
    let profile = state.service.update(&id, request.into()).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[utoipa::path(
    delete,
    path = "/identity/delete-profile/{id}",
    tag = "Profiles",
    params(("id" = String, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_profile(
    State(state): State<ProfileHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(ApiResponse::empty("Profile deleted")))
}

use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::{MyProfileDto, ProfileResponseDto, UpdateProfileDto};
use crate::features::profiles::services::ProfileService;
use crate::shared::types::ApiResponse;

/// Get the caller's profile
///
/// Includes the cleaner extension (rates, services, verification state) when
/// the account is registered as a cleaner.
#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Own profile", body = ApiResponse<MyProfileDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    tag = "profiles",
    security(("bearer_auth" = []))
)]
pub async fn get_my_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
) -> Result<Json<ApiResponse<MyProfileDto>>> {
    let profile = service.get_my_profile(user.id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Update the caller's name and phone
#[utoipa::path(
    put,
    path = "/api/profiles/me",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    tag = "profiles",
    security(("bearer_auth" = []))
)]
pub async fn update_my_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.update_my_profile(user.id, dto).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

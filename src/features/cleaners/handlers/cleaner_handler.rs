use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::cleaners::dtos::{
    CleanerCardDto, CleanerOptionsDto, CleanerProfileDto, RegisterCleanerDto, UpdateCleanerDto,
};
use crate::features::cleaners::services::{BrowseCleanersParams, CleanerService};
use crate::shared::i18n::Locale;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Query params for browsing cleaners
#[derive(Debug, Deserialize, IntoParams)]
pub struct BrowseCleanersQuery {
    /// City name or postal code to search around
    pub location: Option<String>,

    /// Search radius in kilometers (default: 15)
    pub radius_km: Option<f64>,

    /// Required service code (e.g. "deep_cleaning")
    pub service: Option<String>,

    /// Required language code (e.g. "de")
    pub language: Option<String>,

    /// Minimum average rating
    pub min_rating: Option<f64>,

    /// Maximum hourly rate in euros
    pub max_hourly_rate_eur: Option<f64>,

    /// Display locale for rendered labels (default: de)
    pub locale: Option<Locale>,
}

/// Query params for localized option lists
#[derive(Debug, Deserialize, IntoParams)]
pub struct OptionsQuery {
    /// Display locale (default: de)
    pub locale: Option<Locale>,
}

/// Browse verified cleaners
///
/// Optionally filtered by location (resolved against the location catalog and
/// proximity-matched), service, language, rating and rate.
#[utoipa::path(
    get,
    path = "/api/cleaners",
    params(BrowseCleanersQuery, PaginationQuery),
    responses(
        (status = 200, description = "Matching cleaners", body = ApiResponse<Vec<CleanerCardDto>>),
        (status = 400, description = "Unknown location or filter value")
    ),
    tag = "cleaners"
)]
pub async fn browse_cleaners(
    State(service): State<Arc<CleanerService>>,
    Query(query): Query<BrowseCleanersQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<CleanerCardDto>>>> {
    let params = BrowseCleanersParams {
        location: query.location,
        radius_km: query.radius_km,
        service: query.service,
        language: query.language,
        min_rating: query.min_rating,
        max_hourly_rate_eur: query.max_hourly_rate_eur,
        locale: query.locale.unwrap_or_default(),
        pagination,
    };

    let (cleaners, total) = service.browse(params).await?;
    Ok(Json(ApiResponse::success(
        Some(cleaners),
        None,
        Some(Meta { total }),
    )))
}

/// Localized option lists for the cleaner onboarding form
#[utoipa::path(
    get,
    path = "/api/cleaners/options",
    params(OptionsQuery),
    responses(
        (status = 200, description = "Available services, languages and weekdays", body = ApiResponse<CleanerOptionsDto>),
    ),
    tag = "cleaners"
)]
pub async fn cleaner_options(
    Query(query): Query<OptionsQuery>,
) -> Result<Json<ApiResponse<CleanerOptionsDto>>> {
    let options = CleanerOptionsDto::for_locale(query.locale.unwrap_or_default());
    Ok(Json(ApiResponse::success(Some(options), None, None)))
}

/// Get a single cleaner card
#[utoipa::path(
    get,
    path = "/api/cleaners/{id}",
    params(
        ("id" = Uuid, Path, description = "Cleaner id")
    ),
    responses(
        (status = 200, description = "Cleaner found", body = ApiResponse<CleanerCardDto>),
        (status = 404, description = "Cleaner not found")
    ),
    tag = "cleaners"
)]
pub async fn get_cleaner(
    State(service): State<Arc<CleanerService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CleanerCardDto>>> {
    let cleaner = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(cleaner), None, None)))
}

/// Submit the cleaner onboarding form
///
/// Creates the cleaner record with verification pending; documents are
/// reviewed out of band before the account shows up in the browse listing.
#[utoipa::path(
    post,
    path = "/api/cleaners/register",
    request_body = RegisterCleanerDto,
    responses(
        (status = 201, description = "Cleaner registered, verification pending", body = ApiResponse<CleanerProfileDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Already registered as a cleaner")
    ),
    tag = "cleaners",
    security(("bearer_auth" = []))
)]
pub async fn register_cleaner(
    user: AuthenticatedUser,
    State(service): State<Arc<CleanerService>>,
    AppJson(dto): AppJson<RegisterCleanerDto>,
) -> Result<(StatusCode, Json<ApiResponse<CleanerProfileDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let cleaner = service.register(user.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(cleaner),
            Some("Registrierung eingegangen, wir prüfen Ihre Angaben.".to_string()),
            None,
        )),
    ))
}

/// Update the caller's cleaner details
#[utoipa::path(
    put,
    path = "/api/cleaners/me",
    request_body = UpdateCleanerDto,
    responses(
        (status = 200, description = "Cleaner profile updated", body = ApiResponse<CleanerProfileDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Cleaner profile not found")
    ),
    tag = "cleaners",
    security(("bearer_auth" = []))
)]
pub async fn update_my_cleaner(
    user: AuthenticatedUser,
    State(service): State<Arc<CleanerService>>,
    AppJson(dto): AppJson<UpdateCleanerDto>,
) -> Result<Json<ApiResponse<CleanerProfileDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let cleaner = service.update_me(user.id, dto).await?;
    Ok(Json(ApiResponse::success(Some(cleaner), None, None)))
}

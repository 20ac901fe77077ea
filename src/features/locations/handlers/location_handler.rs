use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{LocationResponseDto, NearbyLocationDto};
use crate::features::locations::services::LocationService;
use crate::shared::constants::DEFAULT_SEARCH_RADIUS_KM;
use crate::shared::types::{ApiResponse, Meta};

/// Query params for location search and resolution
#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationQuery {
    /// Free-text query: city, district or postal code
    pub q: String,
}

/// Query params for the nearby listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct NearbyQuery {
    /// City name or postal code identifying the center
    pub q: String,

    /// Search radius in kilometers (default: 15)
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Autocomplete suggestions for a location query
///
/// Returns at most 12 entries; a full page means the query is still too broad
/// and the client should let the user keep typing.
#[utoipa::path(
    get,
    path = "/api/locations/search",
    params(LocationQuery),
    responses(
        (status = 200, description = "Matching catalog entries", body = ApiResponse<Vec<LocationResponseDto>>),
    ),
    tag = "locations"
)]
pub async fn search_locations(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let suggestions: Vec<LocationResponseDto> =
        service.search(&query.q).into_iter().map(Into::into).collect();

    let meta = Meta {
        total: suggestions.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(suggestions), None, Some(meta))))
}

/// Resolve a query to exactly one catalog entry
///
/// Matches a full city name, display name or postal code; used to turn a
/// deep-link parameter back into a full location record.
#[utoipa::path(
    get,
    path = "/api/locations/resolve",
    params(LocationQuery),
    responses(
        (status = 200, description = "Resolved catalog entry", body = ApiResponse<LocationResponseDto>),
        (status = 404, description = "No entry matches the query")
    ),
    tag = "locations"
)]
pub async fn resolve_location(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    let entry = service
        .find_exact(&query.q)
        .map(LocationResponseDto::from)
        .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", query.q)))?;

    Ok(Json(ApiResponse::success(Some(entry), None, None)))
}

/// List catalog entries within a radius of a center location
#[utoipa::path(
    get,
    path = "/api/locations/nearby",
    params(NearbyQuery),
    responses(
        (status = 200, description = "Catalog entries within the radius", body = ApiResponse<Vec<NearbyLocationDto>>),
        (status = 404, description = "Center location not found")
    ),
    tag = "locations"
)]
pub async fn nearby_locations(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse<Vec<NearbyLocationDto>>>> {
    let center = service
        .find_exact(&query.q)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", query.q)))?;

    let radius_km = query.radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);

    let nearby: Vec<NearbyLocationDto> = service
        .nearby(&center, radius_km)
        .into_iter()
        .map(|entry| NearbyLocationDto {
            location: entry.into(),
            distance_km: LocationService::haversine_km(
                center.lat, center.lng, entry.lat, entry.lng,
            ),
        })
        .collect();

    let meta = Meta {
        total: nearby.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(nearby), None, Some(meta))))
}

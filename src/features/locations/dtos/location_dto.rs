use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::locations::models::AustrianLocation;

/// Response DTO for a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponseDto {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub postal_code: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

impl From<&AustrianLocation> for LocationResponseDto {
    fn from(entry: &AustrianLocation) -> Self {
        Self {
            city: entry.city.clone(),
            district: entry.district.clone(),
            postal_code: entry.postal_code.clone(),
            state: entry.state.clone(),
            lat: entry.lat,
            lng: entry.lng,
            display_name: entry.display_name.clone(),
        }
    }
}

/// Catalog entry plus its distance from the requested center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLocationDto {
    #[serde(flatten)]
    pub location: LocationResponseDto,
    pub distance_km: f64,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::cleaners::dtos::CleanerProfileDto;
use crate::features::profiles::models::{Profile, UserType};
use crate::shared::validation::PHONE_REGEX;

/// Response DTO for a base profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponseDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name,
            email: p.email,
            phone: p.phone,
            user_type: p.user_type,
            created_at: p.created_at,
        }
    }
}

/// Own profile with the cleaner extension when the account is a cleaner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyProfileDto {
    #[serde(flatten)]
    pub profile: ProfileResponseDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaner: Option<CleanerProfileDto>,
}

/// Request DTO for updating the base profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub full_name: String,

    /// Phone number in international format (+43 ...)
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,
}

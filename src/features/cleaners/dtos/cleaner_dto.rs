use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::cleaners::models::{Cleaner, CleanerListing, VerificationStatus};
use crate::features::locations::services::LocationService;
use crate::shared::i18n::{Language, Locale, ServiceKind, Weekday};
use crate::shared::types::LabeledOption;
use crate::shared::validation::{PHONE_REGEX, POSTAL_CODE_REGEX};

/// Public browse card for a cleaner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanerCardDto {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate_cents: Option<i32>,
    pub location_city: String,
    pub location_postal_code: Option<String>,
    pub languages: Vec<String>,
    pub services_offered: Vec<String>,
    pub verified: bool,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub total_jobs_completed: i32,
    /// Distance from the searched location, when it resolves to the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Rendered distance ("2.5km entfernt"), in the requested locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
}

impl CleanerCardDto {
    pub fn from_listing(
        listing: CleanerListing,
        distance_km: Option<f64>,
        locale: Locale,
    ) -> Self {
        Self {
            id: listing.id,
            full_name: listing.full_name,
            bio: listing.bio,
            hourly_rate_cents: listing.hourly_rate_cents,
            location_city: listing.location_city,
            location_postal_code: listing.location_postal_code,
            languages: listing.languages,
            services_offered: listing.services_offered,
            verified: listing.verification_status == VerificationStatus::Verified,
            average_rating: listing.average_rating,
            total_reviews: listing.total_reviews,
            total_jobs_completed: listing.total_jobs_completed,
            distance_km,
            distance_label: distance_km.map(|d| LocationService::format_distance(d, locale)),
        }
    }
}

/// Localized option lists for the cleaner onboarding form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanerOptionsDto {
    pub services: Vec<LabeledOption>,
    pub languages: Vec<LabeledOption>,
    pub availability_days: Vec<LabeledOption>,
}

impl CleanerOptionsDto {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            services: ServiceKind::ALL
                .into_iter()
                .map(|s| LabeledOption {
                    code: s.code().to_string(),
                    label: s.label(locale).to_string(),
                })
                .collect(),
            languages: Language::ALL
                .into_iter()
                .map(|l| LabeledOption {
                    code: l.code().to_string(),
                    label: l.label(locale).to_string(),
                })
                .collect(),
            availability_days: Weekday::ALL
                .into_iter()
                .map(|d| LabeledOption {
                    code: d.code().to_string(),
                    label: d.label(locale).to_string(),
                })
                .collect(),
        }
    }
}

/// Full cleaner details for the own-profile view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanerProfileDto {
    pub bio: Option<String>,
    pub hourly_rate_cents: Option<i32>,
    pub location_city: String,
    pub location_postal_code: Option<String>,
    pub location_address: Option<String>,
    pub service_areas: Vec<String>,
    pub languages: Vec<String>,
    pub services_offered: Vec<String>,
    pub availability_days: Vec<String>,
    pub verification_status: VerificationStatus,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub total_jobs_completed: i32,
    pub is_active: bool,
}

impl From<Cleaner> for CleanerProfileDto {
    fn from(c: Cleaner) -> Self {
        Self {
            bio: c.bio,
            hourly_rate_cents: c.hourly_rate_cents,
            location_city: c.location_city,
            location_postal_code: c.location_postal_code,
            location_address: c.location_address,
            service_areas: c.service_areas,
            languages: c.languages,
            services_offered: c.services_offered,
            availability_days: c.availability_days,
            verification_status: c.verification_status,
            average_rating: c.average_rating,
            total_reviews: c.total_reviews,
            total_jobs_completed: c.total_jobs_completed,
            is_active: c.is_active,
        }
    }
}

/// Cleaner onboarding submission (work info, skills, location, description)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCleanerDto {
    /// Updates the profile name when given (step one of the onboarding form)
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub full_name: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    /// Areas the cleaner serves, as catalog display names
    #[validate(length(min = 1, message = "At least one service area is required"))]
    pub service_areas: Vec<String>,

    /// Advertised rate in whole euros per hour
    pub hourly_rate_eur: f64,

    /// Weekday codes the cleaner is available on
    pub availability_days: Vec<String>,

    /// Language codes (at least one)
    #[validate(length(min = 1, message = "At least one language is required"))]
    pub languages: Vec<String>,

    /// Service codes the cleaner offers
    pub services_offered: Vec<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub bio: Option<String>,

    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub location_city: String,

    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Invalid Austrian postal code"))]
    pub location_postal_code: Option<String>,

    #[validate(length(max = 255, message = "Address must not exceed 255 characters"))]
    pub location_address: Option<String>,
}

/// Update of the cleaner-specific profile fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCleanerDto {
    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub bio: Option<String>,

    /// Advertised rate in euros per hour
    pub hourly_rate_eur: Option<f64>,

    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub location_city: String,

    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Invalid Austrian postal code"))]
    pub location_postal_code: Option<String>,

    #[validate(length(max = 255, message = "Address must not exceed 255 characters"))]
    pub location_address: Option<String>,

    pub languages: Vec<String>,
    pub services_offered: Vec<String>,
    pub availability_days: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_cleaner() -> Cleaner {
        Cleaner {
            id: Uuid::new_v4(),
            bio: Some("Erfahrene Reinigungskraft".to_string()),
            hourly_rate_cents: Some(2500),
            location_city: "Salzburg".to_string(),
            location_postal_code: Some("5020".to_string()),
            location_address: None,
            service_areas: vec!["Salzburg Altstadt".to_string()],
            languages: vec!["de".to_string(), "en".to_string()],
            services_offered: vec!["deep_cleaning".to_string()],
            availability_days: vec!["monday".to_string()],
            verification_status: VerificationStatus::Verified,
            average_rating: 4.8,
            total_reviews: 24,
            total_jobs_completed: 31,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_dto_from_model() {
        let cleaner = sample_cleaner();
        let dto: CleanerProfileDto = cleaner.clone().into();
        assert_eq!(dto.hourly_rate_cents, Some(2500));
        assert_eq!(dto.verification_status, VerificationStatus::Verified);
        assert_eq!(dto.languages, cleaner.languages);
    }

    #[test]
    fn test_card_dto_maps_verified_flag() {
        let listing = CleanerListing {
            id: Uuid::new_v4(),
            full_name: Some("Maria Schmidt".to_string()),
            bio: None,
            hourly_rate_cents: Some(2800),
            location_city: "Salzburg".to_string(),
            location_postal_code: Some("5020".to_string()),
            languages: vec!["de".to_string()],
            services_offered: vec!["regular_cleaning".to_string()],
            verification_status: VerificationStatus::Pending,
            average_rating: 0.0,
            total_reviews: 0,
            total_jobs_completed: 0,
        };
        let dto = CleanerCardDto::from_listing(listing, Some(1.2), Locale::De);
        assert!(!dto.verified);
        assert_eq!(dto.distance_km, Some(1.2));
        assert_eq!(dto.distance_label.as_deref(), Some("1.2km entfernt"));
    }

    #[test]
    fn test_options_are_localized() {
        let de = CleanerOptionsDto::for_locale(Locale::De);
        let en = CleanerOptionsDto::for_locale(Locale::En);

        assert_eq!(de.services.len(), 4);
        assert_eq!(de.languages.len(), 6);
        assert_eq!(de.availability_days.len(), 7);

        let deep_de = de.services.iter().find(|o| o.code == "deep_cleaning").unwrap();
        let deep_en = en.services.iter().find(|o| o.code == "deep_cleaning").unwrap();
        assert_eq!(deep_de.label, "Grundreinigung");
        assert_eq!(deep_en.label, "Deep cleaning");

        assert_eq!(de.availability_days[0].label, "Montag");
        assert_eq!(en.availability_days[0].label, "Monday");
    }
}

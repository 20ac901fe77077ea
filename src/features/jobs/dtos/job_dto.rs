use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::jobs::models::{
    ApartmentSize, CleaningFrequency, CleaningType, Job, JobResponse, JobResponseWithCleaner,
    JobStatus, JobWithResponses,
};
use crate::shared::i18n::Locale;
use crate::shared::types::LabeledOption;
use crate::shared::validation::POSTAL_CODE_REGEX;

/// Request DTO for publishing a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub apartment_size: ApartmentSize,
    pub cleaning_type: CleaningType,
    pub frequency: CleaningFrequency,

    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub location_city: String,

    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Invalid Austrian postal code"))]
    pub location_postal_code: Option<String>,

    pub preferred_date: Option<NaiveDate>,

    /// Budget in euros
    pub budget_eur: Option<f64>,
}

/// Request DTO for changing a posting's status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobStatusDto {
    pub status: JobStatus,
}

/// Request DTO for a cleaner's response to a posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponseDto {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    /// Proposed rate in euros per hour
    pub proposed_rate_eur: f64,

    #[validate(length(max = 255, message = "Availability must not exceed 255 characters"))]
    pub availability: Option<String>,
}

/// Response DTO for a job posting
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub title: String,
    pub description: String,
    pub apartment_size: ApartmentSize,
    pub cleaning_type: CleaningType,
    pub frequency: CleaningFrequency,
    pub location_city: String,
    pub location_postal_code: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub budget_cents: Option<i32>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    /// Number of cleaner responses (owner's listing only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_count: Option<i64>,
    /// Distance from the searched location, when it resolves to the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl JobDto {
    pub fn from_job(job: Job, distance_km: Option<f64>) -> Self {
        Self {
            id: job.id,
            customer_id: job.customer_id,
            title: job.title,
            description: job.description,
            apartment_size: job.apartment_size,
            cleaning_type: job.cleaning_type,
            frequency: job.frequency,
            location_city: job.location_city,
            location_postal_code: job.location_postal_code,
            preferred_date: job.preferred_date,
            budget_cents: job.budget_cents,
            status: job.status,
            created_at: job.created_at,
            response_count: None,
            distance_km,
        }
    }
}

impl From<JobWithResponses> for JobDto {
    fn from(job: JobWithResponses) -> Self {
        Self {
            id: job.id,
            customer_id: job.customer_id,
            title: job.title,
            description: job.description,
            apartment_size: job.apartment_size,
            cleaning_type: job.cleaning_type,
            frequency: job.frequency,
            location_city: job.location_city,
            location_postal_code: job.location_postal_code,
            preferred_date: job.preferred_date,
            budget_cents: job.budget_cents,
            status: job.status,
            created_at: job.created_at,
            response_count: Some(job.response_count),
            distance_km: None,
        }
    }
}

/// Localized option lists for the job posting form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOptionsDto {
    pub apartment_sizes: Vec<LabeledOption>,
    pub cleaning_types: Vec<LabeledOption>,
    pub frequencies: Vec<LabeledOption>,
}

impl JobOptionsDto {
    pub fn for_locale(locale: Locale) -> Self {
        let sizes = [
            ApartmentSize::Studio,
            ApartmentSize::TwoRoom,
            ApartmentSize::ThreeRoom,
            ApartmentSize::FourRoom,
        ];
        let types = [CleaningType::Regular, CleaningType::Deep, CleaningType::Move];
        let frequencies = [
            CleaningFrequency::Weekly,
            CleaningFrequency::Biweekly,
            CleaningFrequency::Monthly,
            CleaningFrequency::Once,
        ];

        Self {
            apartment_sizes: sizes
                .into_iter()
                .map(|s| LabeledOption {
                    code: serde_code(&s),
                    label: s.label(locale).to_string(),
                })
                .collect(),
            cleaning_types: types
                .into_iter()
                .map(|t| LabeledOption {
                    code: serde_code(&t),
                    label: t.label(locale).to_string(),
                })
                .collect(),
            frequencies: frequencies
                .into_iter()
                .map(|f| LabeledOption {
                    code: serde_code(&f),
                    label: f.label(locale).to_string(),
                })
                .collect(),
        }
    }
}

/// The wire code of an enum variant is its serde string form
fn serde_code<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

/// Response DTO for a cleaner's response to a posting
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobResponseDto {
    pub id: Uuid,
    pub job_id: Uuid,
    pub cleaner_id: Uuid,
    pub cleaner_name: Option<String>,
    pub message: String,
    pub proposed_rate_cents: i32,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

impl From<JobResponse> for JobResponseDto {
    fn from(r: JobResponse) -> Self {
        Self {
            id: r.id,
            job_id: r.job_id,
            cleaner_id: r.cleaner_id,
            cleaner_name: None,
            message: r.message,
            proposed_rate_cents: r.proposed_rate_cents,
            availability: r.availability,
            created_at: r.created_at,
        }
    }
}

impl From<JobResponseWithCleaner> for JobResponseDto {
    fn from(r: JobResponseWithCleaner) -> Self {
        Self {
            id: r.id,
            job_id: r.job_id,
            cleaner_id: r.cleaner_id,
            cleaner_name: r.cleaner_name,
            message: r.message,
            proposed_rate_cents: r.proposed_rate_cents,
            availability: r.availability,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_options_use_wire_codes() {
        let options = JobOptionsDto::for_locale(Locale::De);
        let codes: Vec<&str> = options
            .apartment_sizes
            .iter()
            .map(|o| o.code.as_str())
            .collect();
        assert_eq!(codes, vec!["studio", "two_room", "three_room", "four_room"]);

        let deep = options
            .cleaning_types
            .iter()
            .find(|o| o.code == "deep")
            .unwrap();
        assert_eq!(deep.label, "Grundreinigung");

        let en = JobOptionsDto::for_locale(Locale::En);
        assert_eq!(en.frequencies[1].code, "biweekly");
        assert_eq!(en.frequencies[1].label, "Every two weeks");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Manual verification pipeline state of a cleaner.
///
/// New registrations start as pending; documents are reviewed out of band
/// within 24-48 hours and the status flips to verified or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "verification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// Database model for a cleaner (1:1 with a profile of user_type 'cleaner').
///
/// The array columns hold codes of the closed sets in `shared::i18n`; they are
/// validated at the API boundary and stored as plain text.
#[derive(Debug, Clone, FromRow)]
pub struct Cleaner {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Joined row for the public browse listing (cleaner + profile name)
#[derive(Debug, Clone, FromRow)]
pub struct CleanerListing {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub hourly_rate_cents: Option<i32>,
    pub location_city: String,
    pub location_postal_code: Option<String>,
    pub languages: Vec<String>,
    pub services_offered: Vec<String>,
    pub verification_status: VerificationStatus,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub total_jobs_completed: i32,
}

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a cleaner's response to a job posting
#[derive(Debug, Clone, FromRow)]
pub struct JobResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub cleaner_id: Uuid,
    pub message: String,
    pub proposed_rate_cents: i32,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

/// Response row joined with the responding cleaner's display data
#[derive(Debug, Clone, FromRow)]
pub struct JobResponseWithCleaner {
    pub id: Uuid,
    pub job_id: Uuid,
    pub cleaner_id: Uuid,
    pub cleaner_name: Option<String>,
    pub message: String,
    pub proposed_rate_cents: i32,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

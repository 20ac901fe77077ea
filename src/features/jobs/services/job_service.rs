use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cleaners::models::VerificationStatus;
use crate::features::jobs::dtos::{
    CreateJobDto, CreateJobResponseDto, JobDto, JobResponseDto, UpdateJobStatusDto,
};
use crate::features::jobs::models::{Job, JobResponse, JobResponseWithCleaner, JobStatus, JobWithResponses};
use crate::features::locations::models::AustrianLocation;
use crate::features::locations::services::LocationService;
use crate::shared::constants::DEFAULT_SEARCH_RADIUS_KM;
use crate::shared::types::PaginationQuery;

const JOB_COLUMNS: &str = "id, customer_id, title, description, apartment_size, cleaning_type, \
                           frequency, location_city, location_postal_code, preferred_date, \
                           budget_cents, status, created_at, updated_at";

/// Filters for the open-jobs listing
#[derive(Debug, Default)]
pub struct OpenJobsParams {
    /// City name or postal code to search around
    pub location: Option<String>,
    pub radius_km: Option<f64>,
    pub pagination: PaginationQuery,
}

/// Service for job postings and cleaner responses
pub struct JobService {
    pool: PgPool,
    locations: Arc<LocationService>,
}

impl JobService {
    pub fn new(pool: PgPool, locations: Arc<LocationService>) -> Self {
        Self { pool, locations }
    }

    /// Publish a new job posting
    pub async fn create(&self, customer_id: Uuid, dto: CreateJobDto) -> Result<JobDto> {
        let budget_cents = dto
            .budget_eur
            .map(Self::budget_to_cents)
            .transpose()?;

        let job = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (customer_id, title, description, apartment_size,
                              cleaning_type, frequency, location_city,
                              location_postal_code, preferred_date, budget_cents)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(customer_id)
        .bind(&dto.title)
        .bind(dto.description.as_deref().unwrap_or(""))
        .bind(dto.apartment_size)
        .bind(dto.cleaning_type)
        .bind(dto.frequency)
        .bind(&dto.location_city)
        .bind(&dto.location_postal_code)
        .bind(dto.preferred_date)
        .bind(budget_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create job: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Job posted: id={}, city={}", job.id, job.location_city);

        Ok(JobDto::from_job(job, None))
    }

    /// Active postings, optionally proximity-filtered around a location
    pub async fn list_open(&self, params: OpenJobsParams) -> Result<(Vec<JobDto>, i64)> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE status = 'active'
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list open jobs: {:?}", e);
            AppError::Database(e)
        })?;

        let location_query = params
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let located: Vec<(Job, Option<f64>)> = match location_query {
            Some(query) => {
                let center = self.locations.find_exact(query).cloned().ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown location: '{}'", query))
                })?;
                let radius_km = params.radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
                Self::filter_by_proximity(&self.locations, &center, radius_km, jobs)
            }
            None => jobs.into_iter().map(|j| (j, None)).collect(),
        };

        let total = located.len() as i64;
        let offset = params.pagination.offset() as usize;
        let limit = params.pagination.limit() as usize;

        let dtos = located
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(job, distance)| JobDto::from_job(job, distance))
            .collect();

        Ok((dtos, total))
    }

    /// Keep postings whose declared location is nearby the center; pure helper
    /// shared with the tests.
    pub fn filter_by_proximity(
        locations: &LocationService,
        center: &AustrianLocation,
        radius_km: f64,
        jobs: Vec<Job>,
    ) -> Vec<(Job, Option<f64>)> {
        jobs.into_iter()
            .filter_map(|job| {
                let postal = job.location_postal_code.as_deref();
                if locations.is_nearby(center, &job.location_city, postal, radius_km) {
                    let distance = locations.distance_from(center, &job.location_city, postal);
                    Some((job, distance))
                } else {
                    None
                }
            })
            .collect()
    }

    /// The caller's own postings, newest first, with response counts
    pub async fn list_mine(
        &self,
        customer_id: Uuid,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<JobDto>, i64)> {
        let jobs = sqlx::query_as::<_, JobWithResponses>(
            r#"
            SELECT j.id, j.customer_id, j.title, j.description, j.apartment_size,
                   j.cleaning_type, j.frequency, j.location_city, j.location_postal_code,
                   j.preferred_date, j.budget_cents, j.status, j.created_at, j.updated_at,
                   COUNT(r.id) AS response_count
            FROM jobs j
            LEFT JOIN job_responses r ON r.job_id = j.id
            WHERE j.customer_id = $1
            GROUP BY j.id
            ORDER BY j.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(customer_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list own jobs: {:?}", e);
            AppError::Database(e)
        })?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM jobs WHERE customer_id = $1",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count own jobs: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((jobs.into_iter().map(Into::into).collect(), total))
    }

    /// Mark an own posting filled or expired
    pub async fn update_status(
        &self,
        customer_id: Uuid,
        job_id: Uuid,
        dto: UpdateJobStatusDto,
    ) -> Result<JobDto> {
        let job = self.fetch_job(job_id).await?;

        if job.customer_id != customer_id {
            return Err(AppError::Forbidden(
                "Only the posting's owner may change its status".to_string(),
            ));
        }

        Self::ensure_transition(job.status, dto.status)?;

        let job = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job_id)
        .bind(dto.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update job status: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Job {} marked {:?}", job.id, job.status);

        Ok(JobDto::from_job(job, None))
    }

    /// A verified cleaner responds to an active posting
    pub async fn respond(
        &self,
        cleaner_id: Uuid,
        job_id: Uuid,
        dto: CreateJobResponseDto,
    ) -> Result<JobResponseDto> {
        let job = self.fetch_job(job_id).await?;

        if job.status != JobStatus::Active {
            return Err(AppError::Conflict(
                "This posting is no longer open".to_string(),
            ));
        }

        let verification = sqlx::query_scalar::<_, VerificationStatus>(
            "SELECT verification_status FROM cleaners WHERE id = $1 AND is_active = TRUE",
        )
        .bind(cleaner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check cleaner verification: {:?}", e);
            AppError::Database(e)
        })?;

        match verification {
            Some(VerificationStatus::Verified) => {}
            Some(_) => {
                return Err(AppError::Forbidden(
                    "Only verified cleaners can respond to postings".to_string(),
                ))
            }
            None => {
                return Err(AppError::Forbidden(
                    "Only registered cleaners can respond to postings".to_string(),
                ))
            }
        }

        let proposed_rate_cents = Self::budget_to_cents(dto.proposed_rate_eur)?;

        let response = sqlx::query_as::<_, JobResponse>(
            r#"
            INSERT INTO job_responses (job_id, cleaner_id, message, proposed_rate_cents, availability)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_id, cleaner_id, message, proposed_rate_cents, availability, created_at
            "#,
        )
        .bind(job_id)
        .bind(cleaner_id)
        .bind(&dto.message)
        .bind(proposed_rate_cents)
        .bind(dto.availability.as_deref().unwrap_or(""))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.constraint() == Some("job_responses_one_per_cleaner") =>
            {
                AppError::Conflict("You already responded to this posting".to_string())
            }
            _ => {
                tracing::error!("Failed to create job response: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "Job response created: job={}, cleaner={}",
            job_id,
            cleaner_id
        );

        Ok(response.into())
    }

    /// Responses to an own posting, with the responding cleaners' names
    pub async fn list_responses(
        &self,
        customer_id: Uuid,
        job_id: Uuid,
    ) -> Result<Vec<JobResponseDto>> {
        let job = self.fetch_job(job_id).await?;

        if job.customer_id != customer_id {
            return Err(AppError::Forbidden(
                "Only the posting's owner may view its responses".to_string(),
            ));
        }

        let responses = sqlx::query_as::<_, JobResponseWithCleaner>(
            r#"
            SELECT r.id, r.job_id, r.cleaner_id, p.full_name AS cleaner_name,
                   r.message, r.proposed_rate_cents, r.availability, r.created_at
            FROM job_responses r
            JOIN profiles p ON p.id = r.cleaner_id
            WHERE r.job_id = $1
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list job responses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(responses.into_iter().map(Into::into).collect())
    }

    /// Postings only move forward from active
    fn ensure_transition(current: JobStatus, next: JobStatus) -> Result<()> {
        match (current, next) {
            (JobStatus::Active, JobStatus::Filled) | (JobStatus::Active, JobStatus::Expired) => {
                Ok(())
            }
            _ => Err(AppError::Conflict(format!(
                "Cannot change a {:?} posting to {:?}",
                current, next
            ))),
        }
    }

    fn budget_to_cents(eur: f64) -> Result<i32> {
        if !eur.is_finite() || eur <= 0.0 || eur > 100_000.0 {
            return Err(AppError::Validation(
                "Amount must be a positive number of euros".to_string(),
            ));
        }
        Ok((eur * 100.0).round() as i32)
    }

    async fn fetch_job(&self, job_id: Uuid) -> Result<Job> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch job: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::jobs::models::{ApartmentSize, CleaningFrequency, CleaningType};
    use crate::features::locations::models::LocationCatalog;
    use chrono::Utc;

    fn job(city: &str, postal: Option<&str>) -> Job {
        Job {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            title: "Wohnungsreinigung".to_string(),
            description: String::new(),
            apartment_size: ApartmentSize::TwoRoom,
            cleaning_type: CleaningType::Regular,
            frequency: CleaningFrequency::Weekly,
            location_city: city.to_string(),
            location_postal_code: postal.map(String::from),
            preferred_date: None,
            budget_cents: Some(8000),
            status: JobStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_transitions() {
        assert!(JobService::ensure_transition(JobStatus::Active, JobStatus::Filled).is_ok());
        assert!(JobService::ensure_transition(JobStatus::Active, JobStatus::Expired).is_ok());
        assert!(JobService::ensure_transition(JobStatus::Filled, JobStatus::Active).is_err());
        assert!(JobService::ensure_transition(JobStatus::Expired, JobStatus::Filled).is_err());
        assert!(JobService::ensure_transition(JobStatus::Active, JobStatus::Active).is_err());
    }

    #[test]
    fn test_budget_conversion() {
        assert_eq!(JobService::budget_to_cents(80.0).unwrap(), 8000);
        assert_eq!(JobService::budget_to_cents(25.5).unwrap(), 2550);
        assert!(JobService::budget_to_cents(0.0).is_err());
        assert!(JobService::budget_to_cents(-5.0).is_err());
        assert!(JobService::budget_to_cents(f64::INFINITY).is_err());
    }

    #[test]
    fn test_open_jobs_proximity_filter() {
        let locations =
            LocationService::new(Arc::new(LocationCatalog::bundled().unwrap()));
        let altstadt = locations.find_exact("Salzburg Altstadt").unwrap().clone();

        let jobs = vec![
            job("Anif", Some("5081")),
            job("Graz", Some("8010")),
            job("Salzburg", None),
        ];

        let kept = JobService::filter_by_proximity(&locations, &altstadt, 15.0, jobs);
        let cities: Vec<&str> = kept.iter().map(|(j, _)| j.location_city.as_str()).collect();
        assert_eq!(cities, vec!["Anif", "Salzburg"]);
        // Anif resolves to the catalog, so it carries a distance
        assert!(kept[0].1.is_some());
    }
}

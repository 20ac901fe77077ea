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
use crate::features::jobs::dtos::{
    CreateJobDto, CreateJobResponseDto, JobDto, JobOptionsDto, JobResponseDto, UpdateJobStatusDto,
};
use crate::features::jobs::services::{JobService, OpenJobsParams};
use crate::shared::i18n::Locale;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Query params for the open-jobs listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct OpenJobsQuery {
    /// City name or postal code to search around
    pub location: Option<String>,

    /// Search radius in kilometers (default: 15)
    pub radius_km: Option<f64>,
}

/// Query params for localized option lists
#[derive(Debug, Deserialize, IntoParams)]
pub struct JobOptionsQuery {
    /// Display locale (default: de)
    pub locale: Option<Locale>,
}

/// Localized option lists for the job posting form
#[utoipa::path(
    get,
    path = "/api/jobs/options",
    params(JobOptionsQuery),
    responses(
        (status = 200, description = "Apartment sizes, cleaning types and frequencies", body = ApiResponse<JobOptionsDto>),
    ),
    tag = "jobs"
)]
pub async fn job_options(
    Query(query): Query<JobOptionsQuery>,
) -> Result<Json<ApiResponse<JobOptionsDto>>> {
    let options = JobOptionsDto::for_locale(query.locale.unwrap_or_default());
    Ok(Json(ApiResponse::success(Some(options), None, None)))
}

/// Publish a job posting
#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job posted", body = ApiResponse<JobDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "jobs",
    security(("bearer_auth" = []))
)]
pub async fn create_job(
    user: AuthenticatedUser,
    State(service): State<Arc<JobService>>,
    AppJson(dto): AppJson<CreateJobDto>,
) -> Result<(StatusCode, Json<ApiResponse<JobDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let job = service.create(user.id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(job), None, None)),
    ))
}

/// List open postings
///
/// Optionally filtered by location: the query is resolved against the catalog
/// and postings outside the radius are dropped.
#[utoipa::path(
    get,
    path = "/api/jobs",
    params(OpenJobsQuery, PaginationQuery),
    responses(
        (status = 200, description = "Open postings", body = ApiResponse<Vec<JobDto>>),
        (status = 400, description = "Unknown location"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "jobs",
    security(("bearer_auth" = []))
)]
pub async fn list_open_jobs(
    _user: AuthenticatedUser,
    State(service): State<Arc<JobService>>,
    Query(query): Query<OpenJobsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<JobDto>>>> {
    let params = OpenJobsParams {
        location: query.location,
        radius_km: query.radius_km,
        pagination,
    };

    let (jobs, total) = service.list_open(params).await?;
    Ok(Json(ApiResponse::success(
        Some(jobs),
        None,
        Some(Meta { total }),
    )))
}

/// List the caller's own postings with response counts
#[utoipa::path(
    get,
    path = "/api/jobs/mine",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Own postings", body = ApiResponse<Vec<JobDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "jobs",
    security(("bearer_auth" = []))
)]
pub async fn list_my_jobs(
    user: AuthenticatedUser,
    State(service): State<Arc<JobService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<JobDto>>>> {
    let (jobs, total) = service.list_mine(user.id, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(jobs),
        None,
        Some(Meta { total }),
    )))
}

/// Mark an own posting filled or expired
#[utoipa::path(
    patch,
    path = "/api/jobs/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Job id")
    ),
    request_body = UpdateJobStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<JobDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the posting's owner"),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Invalid status transition")
    ),
    tag = "jobs",
    security(("bearer_auth" = []))
)]
pub async fn update_job_status(
    user: AuthenticatedUser,
    State(service): State<Arc<JobService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateJobStatusDto>,
) -> Result<Json<ApiResponse<JobDto>>> {
    let job = service.update_status(user.id, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(job), None, None)))
}

/// Respond to a posting (verified cleaners only)
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/responses",
    params(
        ("id" = Uuid, Path, description = "Job id")
    ),
    request_body = CreateJobResponseDto,
    responses(
        (status = 201, description = "Response created", body = ApiResponse<JobResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not a verified cleaner"),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Posting closed or already responded")
    ),
    tag = "jobs",
    security(("bearer_auth" = []))
)]
pub async fn respond_to_job(
    user: AuthenticatedUser,
    State(service): State<Arc<JobService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateJobResponseDto>,
) -> Result<(StatusCode, Json<ApiResponse<JobResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.respond(user.id, id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

/// List responses to an own posting
#[utoipa::path(
    get,
    path = "/api/jobs/{id}/responses",
    params(
        ("id" = Uuid, Path, description = "Job id")
    ),
    responses(
        (status = 200, description = "Responses to the posting", body = ApiResponse<Vec<JobResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the posting's owner"),
        (status = 404, description = "Job not found")
    ),
    tag = "jobs",
    security(("bearer_auth" = []))
)]
pub async fn list_job_responses(
    user: AuthenticatedUser,
    State(service): State<Arc<JobService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<JobResponseDto>>>> {
    let responses = service.list_responses(user.id, id).await?;
    let meta = Meta {
        total: responses.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(responses), None, Some(meta))))
}

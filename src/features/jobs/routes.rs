use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::jobs::handlers;
use crate::features::jobs::services::JobService;

/// Public jobs routes (form options only)
pub fn public_routes() -> Router {
    Router::new().route("/api/jobs/options", get(handlers::job_options))
}

/// Create routes for the jobs feature (all protected)
pub fn routes(service: Arc<JobService>) -> Router {
    Router::new()
        .route(
            "/api/jobs",
            get(handlers::list_open_jobs).post(handlers::create_job),
        )
        .route("/api/jobs/mine", get(handlers::list_my_jobs))
        .route("/api/jobs/{id}/status", patch(handlers::update_job_status))
        .route(
            "/api/jobs/{id}/responses",
            get(handlers::list_job_responses).post(handlers::respond_to_job),
        )
        .with_state(service)
}

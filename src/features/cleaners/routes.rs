use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::cleaners::handlers;
use crate::features::cleaners::services::CleanerService;

/// Public cleaner routes (browse and detail)
pub fn public_routes(service: Arc<CleanerService>) -> Router {
    Router::new()
        .route("/api/cleaners", get(handlers::browse_cleaners))
        .route("/api/cleaners/options", get(handlers::cleaner_options))
        .route("/api/cleaners/{id}", get(handlers::get_cleaner))
        .with_state(service)
}

/// Protected cleaner routes (registration and self-service updates)
pub fn protected_routes(service: Arc<CleanerService>) -> Router {
    Router::new()
        .route("/api/cleaners/register", post(handlers::register_cleaner))
        .route("/api/cleaners/me", put(handlers::update_my_cleaner))
        .with_state(service)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profiles::handlers;
use crate::features::profiles::services::ProfileService;

/// Create routes for the profiles feature (all protected)
pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route(
            "/api/profiles/me",
            get(handlers::get_my_profile).put(handlers::update_my_profile),
        )
        .with_state(service)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
///
/// Note: This feature is public (no authentication required); it serves the
/// autocomplete input on the landing page.
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations/search", get(handlers::search_locations))
        .route("/api/locations/resolve", get(handlers::resolve_location))
        .route("/api/locations/nearby", get(handlers::nearby_locations))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::models::LocationCatalog;
    use axum_test::TestServer;
    use serde_json::Value;

    fn test_server() -> TestServer {
        let catalog = Arc::new(LocationCatalog::bundled().unwrap());
        let service = Arc::new(LocationService::new(catalog));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_search_endpoint_returns_suggestions() {
        let server = test_server();

        let response = server.get("/api/locations/search").add_query_param("q", "salz").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let data = body["data"].as_array().unwrap();
        assert!(!data.is_empty());
        assert!(data.len() <= 12);
        assert!(data
            .iter()
            .any(|e| e["displayName"] == "Salzburg Altstadt"));
    }

    #[tokio::test]
    async fn test_search_endpoint_short_query_is_empty() {
        let server = test_server();

        let response = server.get("/api/locations/search").add_query_param("q", "s").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_resolve_endpoint_finds_postal_code() {
        let server = test_server();

        let response = server.get("/api/locations/resolve").add_query_param("q", "1010").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["displayName"], "Wien");
    }

    #[tokio::test]
    async fn test_resolve_endpoint_unknown_is_404() {
        let server = test_server();

        let response = server
            .get("/api/locations/resolve")
            .add_query_param("q", "Atlantis")
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_nearby_endpoint_filters_by_radius() {
        let server = test_server();

        let response = server
            .get("/api/locations/nearby")
            .add_query_param("q", "Wien")
            .add_query_param("radius_km", "50")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert!(data.iter().any(|e| e["displayName"] == "Wien Leopoldstadt"));
        assert!(!data.iter().any(|e| e["displayName"] == "Graz"));
    }
}

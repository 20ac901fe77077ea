#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: uuid::Uuid::nil(),
        email: Some("test@example.com".to_string()),
        role: "authenticated".to_string(),
    }
}

#[cfg(test)]
async fn inject_test_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_user());
    next.run(request).await
}

/// Wrap a router so every request carries an authenticated test user,
/// bypassing JWT validation in router-level tests.
#[cfg(test)]
pub fn with_test_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum_test::TestServer;

    async fn whoami(user: AuthenticatedUser) -> String {
        user.id.to_string()
    }

    #[tokio::test]
    async fn test_with_test_auth_injects_user() {
        let router = Router::new().route("/whoami", get(whoami));

        // Without the wrapper the extractor rejects the request
        let bare = TestServer::new(Router::new().route("/whoami", get(whoami))).unwrap();
        bare.get("/whoami")
            .await
            .assert_status(axum::http::StatusCode::UNAUTHORIZED);

        let server = TestServer::new(with_test_auth(router)).unwrap();
        let response = server.get("/whoami").await;
        response.assert_status_ok();
        response.assert_text(uuid::Uuid::nil().to_string());
    }
}

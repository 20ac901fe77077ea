use crate::core::config::IdentityConfig;
use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session returned by the identity provider on signup/login/refresh
#[derive(Debug, Clone, Deserialize)]
pub struct IdentitySession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: IdentityUser,
}

/// Account record embedded in a session response
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshTokenBody<'a> {
    refresh_token: &'a str,
}

/// Error payload of the identity provider
#[derive(Debug, Deserialize)]
struct IdentityErrorResponse {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl IdentityErrorResponse {
    fn text(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown identity provider error".to_string())
    }
}

/// Client for the hosted identity provider's auth API.
///
/// All credential handling lives at the provider; this service only forwards
/// signup/login/refresh calls with its publishable key and never stores
/// password material.
pub struct IdentityClient {
    config: IdentityConfig,
    http_client: reqwest::Client,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a new account; returns a live session
    ///
    /// Returns Conflict if the email is already registered.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<IdentitySession> {
        let url = format!("{}/auth/v1/signup", self.config.base_url);

        tracing::debug!("Creating account at identity provider: {}", email);

        self.execute(
            self.http_client
                .post(&url)
                .header("apikey", &self.config.publishable_key)
                .json(&PasswordCredentials { email, password }),
        )
        .await
    }

    /// Exchange email/password credentials for a session
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.base_url
        );

        self.execute(
            self.http_client
                .post(&url)
                .header("apikey", &self.config.publishable_key)
                .json(&PasswordCredentials { email, password }),
        )
        .await
    }

    /// Exchange a refresh token for a fresh session
    pub async fn refresh(&self, refresh_token: &str) -> Result<IdentitySession> {
        let url = format!(
            "{}/auth/v1/token?grant_type=refresh_token",
            self.config.base_url
        );

        self.execute(
            self.http_client
                .post(&url)
                .header("apikey", &self.config.publishable_key)
                .json(&RefreshTokenBody { refresh_token }),
        )
        .await
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<IdentitySession> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Identity provider request failed: {}", e);
            AppError::ExternalServiceError(format!("Identity provider unreachable: {}", e))
        })?;

        let status = response.status();

        if status.is_success() {
            return response.json::<IdentitySession>().await.map_err(|e| {
                tracing::error!("Failed to parse identity provider response: {}", e);
                AppError::ExternalServiceError(format!(
                    "Failed to parse identity provider response: {}",
                    e
                ))
            });
        }

        let body = response.text().await.unwrap_or_default();
        let error: IdentityErrorResponse =
            serde_json::from_str(&body).unwrap_or(IdentityErrorResponse {
                error_code: None,
                msg: None,
                message: None,
            });

        let code = error.error_code.as_deref().unwrap_or_default();
        let text = error.text();

        if code == "user_already_exists" || text.contains("already registered") {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        if code == "invalid_credentials" || status.as_u16() == 400 || status.as_u16() == 401 {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        tracing::error!(
            "Identity provider returned HTTP {}: {}",
            status,
            text
        );
        Err(AppError::ExternalServiceError(text))
    }
}

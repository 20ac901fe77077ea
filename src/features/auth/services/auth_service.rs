use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::clients::{IdentityClient, IdentitySession};
use crate::features::auth::dtos::{
    AuthResponseDto, AuthUserDto, LoginRequestDto, MeResponseDto, RefreshTokenRequestDto,
    RefreshTokenResponseDto, RegisterRequestDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::models::Profile;

/// Service for authentication operations (register, login, refresh).
///
/// Credentials are handled entirely by the hosted identity provider; this
/// service only keeps the local profile row in step with the provider account.
pub struct AuthService {
    pool: PgPool,
    identity_client: Arc<IdentityClient>,
}

impl AuthService {
    pub fn new(pool: PgPool, identity_client: Arc<IdentityClient>) -> Self {
        Self {
            pool,
            identity_client,
        }
    }

    /// Register a new account and create its profile row
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let session = self
            .identity_client
            .sign_up(&dto.email, &dto.password)
            .await?;

        // The profile id is the provider's account id, so a retried signup
        // updates instead of duplicating.
        sqlx::query(
            r#"
            INSERT INTO profiles (id, full_name, email, phone, user_type)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                phone = EXCLUDED.phone,
                user_type = EXCLUDED.user_type,
                updated_at = NOW()
            "#,
        )
        .bind(session.user.id)
        .bind(&dto.full_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.user_type)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create profile: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Account registered: id={}, user_type={:?}",
            session.user.id,
            dto.user_type
        );

        Ok(self.session_to_response(session).await)
    }

    /// Login with email and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let session = self
            .identity_client
            .sign_in(&dto.email, &dto.password)
            .await?;

        Ok(self.session_to_response(session).await)
    }

    /// Refresh access token using refresh token
    pub async fn refresh_token(
        &self,
        dto: RefreshTokenRequestDto,
    ) -> Result<RefreshTokenResponseDto> {
        let session = self.identity_client.refresh(&dto.refresh_token).await?;

        Ok(RefreshTokenResponseDto {
            access_token: session.access_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            refresh_token: session.refresh_token,
        })
    }

    /// Get current user info (for /me endpoint)
    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<MeResponseDto> {
        let profile = self.fetch_profile(user.id).await?;

        Ok(MeResponseDto {
            id: user.id,
            email: user.email,
            role: user.role,
            full_name: profile.as_ref().and_then(|p| p.full_name.clone()),
            user_type: profile.as_ref().map(|p| p.user_type),
        })
    }

    async fn session_to_response(&self, session: IdentitySession) -> AuthResponseDto {
        // The profile row may be missing for accounts created outside this
        // API; the session is still valid then.
        let profile = self.fetch_profile(session.user.id).await.unwrap_or(None);

        AuthResponseDto {
            access_token: session.access_token,
            token_type: session.token_type,
            expires_in: session.expires_in,
            refresh_token: session.refresh_token,
            user: AuthUserDto {
                id: session.user.id,
                email: session.user.email,
                full_name: profile.as_ref().and_then(|p| p.full_name.clone()),
                user_type: profile.as_ref().map(|p| p.user_type),
            },
        }
    }

    async fn fetch_profile(&self, id: uuid::Uuid) -> Result<Option<Profile>> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, full_name, email, phone, user_type, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch profile: {:?}", e);
            AppError::Database(e)
        })
    }
}

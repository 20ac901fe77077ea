use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cleaners::models::Cleaner;
use crate::features::profiles::dtos::{MyProfileDto, ProfileResponseDto, UpdateProfileDto};
use crate::features::profiles::models::{Profile, UserType};

/// Service for base profile operations
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the caller's profile, with cleaner details when present
    pub async fn get_my_profile(&self, user_id: Uuid) -> Result<MyProfileDto> {
        let profile = self.fetch_profile(user_id).await?;

        let cleaner = if profile.user_type == UserType::Cleaner {
            sqlx::query_as::<_, Cleaner>(
                r#"
                SELECT id, bio, hourly_rate_cents, location_city, location_postal_code,
                       location_address, service_areas, languages, services_offered,
                       availability_days, verification_status, average_rating,
                       total_reviews, total_jobs_completed, is_active,
                       created_at, updated_at
                FROM cleaners
                WHERE id = $1
                "#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch cleaner details: {:?}", e);
                AppError::Database(e)
            })?
        } else {
            None
        };

        Ok(MyProfileDto {
            profile: profile.into(),
            cleaner: cleaner.map(Into::into),
        })
    }

    /// Update name and phone of the caller's profile
    pub async fn update_my_profile(
        &self,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<ProfileResponseDto> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET full_name = $2, phone = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, full_name, email, phone, user_type, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&dto.full_name)
        .bind(&dto.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        tracing::info!("Profile updated: {}", user_id);

        Ok(profile.into())
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Profile> {
        sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, full_name, email, phone, user_type, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch profile: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }
}

use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::cleaners::dtos::{
    CleanerCardDto, CleanerProfileDto, RegisterCleanerDto, UpdateCleanerDto,
};
use crate::features::cleaners::models::{Cleaner, CleanerListing};
use crate::features::locations::models::AustrianLocation;
use crate::features::locations::services::LocationService;
use crate::shared::constants::{
    DEFAULT_SEARCH_RADIUS_KM, MAX_HOURLY_RATE_EUR, MIN_HOURLY_RATE_EUR,
};
use crate::shared::i18n::{parse_codes, Language, Locale, ServiceKind, Weekday};
use crate::shared::types::PaginationQuery;

/// Filters for the public browse listing
#[derive(Debug, Default)]
pub struct BrowseCleanersParams {
    /// Free-text location (city name or postal code), resolved via the catalog
    pub location: Option<String>,
    pub radius_km: Option<f64>,
    pub service: Option<String>,
    pub language: Option<String>,
    pub min_rating: Option<f64>,
    pub max_hourly_rate_eur: Option<f64>,
    pub locale: Locale,
    pub pagination: PaginationQuery,
}

/// Service for cleaner registration and browsing
pub struct CleanerService {
    pool: PgPool,
    locations: Arc<LocationService>,
}

impl CleanerService {
    pub fn new(pool: PgPool, locations: Arc<LocationService>) -> Self {
        Self { pool, locations }
    }

    /// Browse verified, active cleaners.
    ///
    /// Attribute filters run in SQL; the location filter resolves the query
    /// against the catalog and keeps cleaners that are nearby, decorating each
    /// card with the true distance when it can be computed.
    pub async fn browse(
        &self,
        params: BrowseCleanersParams,
    ) -> Result<(Vec<CleanerCardDto>, i64)> {
        if let Some(service) = params.service.as_deref() {
            if ServiceKind::from_code(service).is_none() {
                return Err(AppError::Validation(format!("Unknown service: '{}'", service)));
            }
        }
        if let Some(language) = params.language.as_deref() {
            if Language::from_code(language).is_none() {
                return Err(AppError::Validation(format!(
                    "Unknown language: '{}'",
                    language
                )));
            }
        }

        let max_rate_cents = params.max_hourly_rate_eur.map(|r| (r * 100.0).round() as i32);

        let listings = sqlx::query_as::<_, CleanerListing>(
            r#"
            SELECT c.id, p.full_name, c.bio, c.hourly_rate_cents,
                   c.location_city, c.location_postal_code,
                   c.languages, c.services_offered, c.verification_status,
                   c.average_rating, c.total_reviews, c.total_jobs_completed
            FROM cleaners c
            JOIN profiles p ON p.id = c.id
            WHERE c.verification_status = 'verified'
              AND c.is_active = TRUE
              AND ($1::text IS NULL OR c.services_offered @> ARRAY[$1::text])
              AND ($2::text IS NULL OR c.languages @> ARRAY[$2::text])
              AND ($3::float8 IS NULL OR c.average_rating >= $3)
              AND ($4::int4 IS NULL OR c.hourly_rate_cents <= $4)
            ORDER BY c.average_rating DESC, c.total_reviews DESC, c.created_at ASC
            "#,
        )
        .bind(&params.service)
        .bind(&params.language)
        .bind(params.min_rating)
        .bind(max_rate_cents)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to browse cleaners: {:?}", e);
            AppError::Database(e)
        })?;

        let location_query = params
            .location
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let located: Vec<(CleanerListing, Option<f64>)> = match location_query {
            Some(query) => {
                let center = self.locations.find_exact(query).cloned().ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown location: '{}'", query))
                })?;
                let radius_km = params.radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
                Self::filter_by_proximity(&self.locations, &center, radius_km, listings)
            }
            None => listings.into_iter().map(|l| (l, None)).collect(),
        };

        let total = located.len() as i64;
        let offset = params.pagination.offset() as usize;
        let limit = params.pagination.limit() as usize;

        let cards = located
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(listing, distance)| {
                CleanerCardDto::from_listing(listing, distance, params.locale)
            })
            .collect();

        Ok((cards, total))
    }

    /// Keep listings whose declared location is nearby the center; pure helper
    /// so the filtering logic is testable without a database.
    pub fn filter_by_proximity(
        locations: &LocationService,
        center: &AustrianLocation,
        radius_km: f64,
        listings: Vec<CleanerListing>,
    ) -> Vec<(CleanerListing, Option<f64>)> {
        listings
            .into_iter()
            .filter_map(|listing| {
                let postal = listing.location_postal_code.as_deref();
                if locations.is_nearby(center, &listing.location_city, postal, radius_km) {
                    let distance =
                        locations.distance_from(center, &listing.location_city, postal);
                    Some((listing, distance))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Single public cleaner card
    pub async fn get_by_id(&self, id: Uuid) -> Result<CleanerCardDto> {
        let listing = sqlx::query_as::<_, CleanerListing>(
            r#"
            SELECT c.id, p.full_name, c.bio, c.hourly_rate_cents,
                   c.location_city, c.location_postal_code,
                   c.languages, c.services_offered, c.verification_status,
                   c.average_rating, c.total_reviews, c.total_jobs_completed
            FROM cleaners c
            JOIN profiles p ON p.id = c.id
            WHERE c.id = $1 AND c.is_active = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get cleaner: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Cleaner {} not found", id)))?;

        Ok(CleanerCardDto::from_listing(listing, None, Locale::default()))
    }

    /// Cleaner onboarding: create the cleaner row (verification pending) and
    /// flip the caller's profile to the cleaner side
    pub async fn register(
        &self,
        user_id: Uuid,
        dto: RegisterCleanerDto,
    ) -> Result<CleanerProfileDto> {
        Self::validate_codes(&dto.languages, &dto.services_offered, &dto.availability_days)?;
        let hourly_rate_cents = Self::hourly_rate_to_cents(dto.hourly_rate_eur)?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query(
            r#"
            UPDATE profiles
            SET user_type = 'cleaner',
                full_name = COALESCE($2, full_name),
                phone = COALESCE($3, phone),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(&dto.full_name)
        .bind(&dto.phone)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile for registration: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        let cleaner = sqlx::query_as::<_, Cleaner>(
            r#"
            INSERT INTO cleaners (id, bio, hourly_rate_cents, location_city,
                                  location_postal_code, location_address,
                                  service_areas, languages, services_offered,
                                  availability_days)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO NOTHING
            RETURNING id, bio, hourly_rate_cents, location_city, location_postal_code,
                      location_address, service_areas, languages, services_offered,
                      availability_days, verification_status, average_rating,
                      total_reviews, total_jobs_completed, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&dto.bio)
        .bind(hourly_rate_cents)
        .bind(&dto.location_city)
        .bind(&dto.location_postal_code)
        .bind(&dto.location_address)
        .bind(&dto.service_areas)
        .bind(&dto.languages)
        .bind(&dto.services_offered)
        .bind(&dto.availability_days)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create cleaner: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::Conflict("Already registered as a cleaner".to_string()))?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Cleaner registered: id={}, city={}, verification pending",
            cleaner.id,
            cleaner.location_city
        );

        Ok(cleaner.into())
    }

    /// Update the caller's cleaner details
    pub async fn update_me(&self, user_id: Uuid, dto: UpdateCleanerDto) -> Result<CleanerProfileDto> {
        Self::validate_codes(&dto.languages, &dto.services_offered, &dto.availability_days)?;
        let hourly_rate_cents = dto
            .hourly_rate_eur
            .map(Self::hourly_rate_to_cents)
            .transpose()?;

        let cleaner = sqlx::query_as::<_, Cleaner>(
            r#"
            UPDATE cleaners
            SET bio = $2,
                hourly_rate_cents = COALESCE($3, hourly_rate_cents),
                location_city = $4,
                location_postal_code = $5,
                location_address = $6,
                languages = $7,
                services_offered = $8,
                availability_days = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, bio, hourly_rate_cents, location_city, location_postal_code,
                      location_address, service_areas, languages, services_offered,
                      availability_days, verification_status, average_rating,
                      total_reviews, total_jobs_completed, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&dto.bio)
        .bind(hourly_rate_cents)
        .bind(&dto.location_city)
        .bind(&dto.location_postal_code)
        .bind(&dto.location_address)
        .bind(&dto.languages)
        .bind(&dto.services_offered)
        .bind(&dto.availability_days)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update cleaner: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Cleaner profile not found".to_string()))?;

        tracing::info!("Cleaner profile updated: {}", user_id);

        Ok(cleaner.into())
    }

    /// Reject code lists with entries outside the closed sets
    fn validate_codes(languages: &[String], services: &[String], days: &[String]) -> Result<()> {
        parse_codes(languages, Language::from_code, "language")
            .map_err(AppError::Validation)?;
        parse_codes(services, ServiceKind::from_code, "service")
            .map_err(AppError::Validation)?;
        parse_codes(days, Weekday::from_code, "availability day")
            .map_err(AppError::Validation)?;
        Ok(())
    }

    /// Convert an advertised euro rate to cents, enforcing the platform bounds
    fn hourly_rate_to_cents(rate_eur: f64) -> Result<i32> {
        if !rate_eur.is_finite()
            || rate_eur < MIN_HOURLY_RATE_EUR as f64
            || rate_eur > MAX_HOURLY_RATE_EUR as f64
        {
            return Err(AppError::Validation(format!(
                "Hourly rate must be between €{} and €{}",
                MIN_HOURLY_RATE_EUR, MAX_HOURLY_RATE_EUR
            )));
        }
        Ok((rate_eur * 100.0).round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cleaners::models::VerificationStatus;
    use crate::features::locations::models::LocationCatalog;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn listing(city: &str, postal: Option<&str>) -> CleanerListing {
        CleanerListing {
            id: Uuid::new_v4(),
            full_name: Some(Name().fake()),
            bio: None,
            hourly_rate_cents: Some(2500),
            location_city: city.to_string(),
            location_postal_code: postal.map(String::from),
            languages: vec!["de".to_string()],
            services_offered: vec!["regular_cleaning".to_string()],
            verification_status: VerificationStatus::Verified,
            average_rating: 4.5,
            total_reviews: 10,
            total_jobs_completed: 12,
        }
    }

    fn location_service() -> LocationService {
        LocationService::new(Arc::new(LocationCatalog::bundled().unwrap()))
    }

    fn center<'a>(service: &'a LocationService, name: &str) -> AustrianLocation {
        service.find_exact(name).unwrap().clone()
    }

    #[test]
    fn test_proximity_filter_keeps_catalog_neighbours() {
        let locations = location_service();
        let altstadt = center(&locations, "Salzburg Altstadt");

        let listings = vec![
            listing("Hallein", Some("5400")),
            listing("Graz", Some("8010")),
        ];

        let kept =
            CleanerService::filter_by_proximity(&locations, &altstadt, 25.0, listings);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0.location_city, "Hallein");
        // Hallein is roughly 14 km from the Altstadt
        let distance = kept[0].1.unwrap();
        assert!(distance > 5.0 && distance < 25.0);
    }

    #[test]
    fn test_proximity_filter_excludes_graz_from_wien() {
        let locations = location_service();
        let wien = center(&locations, "Wien");

        let kept = CleanerService::filter_by_proximity(
            &locations,
            &wien,
            50.0,
            vec![listing("Graz", None)],
        );
        assert!(kept.is_empty());
    }

    #[test]
    fn test_proximity_filter_postal_fallback_without_distance() {
        let locations = location_service();
        let altstadt = center(&locations, "Salzburg Altstadt");

        // Not in the catalog, but 5089 is numerically close to 5020
        let kept = CleanerService::filter_by_proximity(
            &locations,
            &altstadt,
            15.0,
            vec![listing("Wals-Siezenheim", Some("5089"))],
        );
        assert_eq!(kept.len(), 1);
        assert!(kept[0].1.is_none());
    }

    #[test]
    fn test_hourly_rate_bounds() {
        assert!(CleanerService::hourly_rate_to_cents(14.99).is_err());
        assert!(CleanerService::hourly_rate_to_cents(50.01).is_err());
        assert!(CleanerService::hourly_rate_to_cents(f64::NAN).is_err());
        assert_eq!(CleanerService::hourly_rate_to_cents(15.0).unwrap(), 1500);
        assert_eq!(CleanerService::hourly_rate_to_cents(25.5).unwrap(), 2550);
        assert_eq!(CleanerService::hourly_rate_to_cents(50.0).unwrap(), 5000);
    }

    #[test]
    fn test_validate_codes_rejects_unknown_service() {
        let err = CleanerService::validate_codes(
            &["de".to_string()],
            &["window_cleaning".to_string()],
            &[],
        );
        assert!(err.is_err());

        let ok = CleanerService::validate_codes(
            &["de".to_string(), "hr".to_string()],
            &["deep_cleaning".to_string()],
            &["monday".to_string(), "saturday".to_string()],
        );
        assert!(ok.is_ok());
    }
}

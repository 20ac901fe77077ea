use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::cleaners::{
    dtos as cleaners_dtos, handlers as cleaners_handlers, models as cleaners_models,
};
use crate::features::jobs::{dtos as jobs_dtos, handlers as jobs_handlers, models as jobs_models};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::features::profiles::{
    dtos as profiles_dtos, handlers as profiles_handlers, models as profiles_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::refresh_token,
        auth_handlers::get_me,
        // Locations (public)
        locations_handlers::search_locations,
        locations_handlers::resolve_location,
        locations_handlers::nearby_locations,
        // Cleaners
        cleaners_handlers::browse_cleaners,
        cleaners_handlers::cleaner_options,
        cleaners_handlers::get_cleaner,
        cleaners_handlers::register_cleaner,
        cleaners_handlers::update_my_cleaner,
        // Profiles
        profiles_handlers::get_my_profile,
        profiles_handlers::update_my_profile,
        // Jobs
        jobs_handlers::job_options,
        jobs_handlers::create_job,
        jobs_handlers::list_open_jobs,
        jobs_handlers::list_my_jobs,
        jobs_handlers::update_job_status,
        jobs_handlers::respond_to_job,
        jobs_handlers::list_job_responses,
    ),
    components(schemas(
        ApiResponse<serde_json::Value>,
        Meta,
        crate::shared::types::LabeledOption,
        crate::shared::i18n::Locale,
        // Auth
        auth_dtos::RegisterRequestDto,
        auth_dtos::LoginRequestDto,
        auth_dtos::RefreshTokenRequestDto,
        auth_dtos::RefreshTokenResponseDto,
        auth_dtos::AuthResponseDto,
        auth_dtos::AuthUserDto,
        auth_dtos::MeResponseDto,
        // Locations
        locations_dtos::LocationResponseDto,
        locations_dtos::NearbyLocationDto,
        // Cleaners
        cleaners_dtos::CleanerCardDto,
        cleaners_dtos::CleanerOptionsDto,
        cleaners_dtos::CleanerProfileDto,
        cleaners_dtos::RegisterCleanerDto,
        cleaners_dtos::UpdateCleanerDto,
        cleaners_models::VerificationStatus,
        // Profiles
        profiles_dtos::ProfileResponseDto,
        profiles_dtos::MyProfileDto,
        profiles_dtos::UpdateProfileDto,
        profiles_models::UserType,
        // Jobs
        jobs_dtos::CreateJobDto,
        jobs_dtos::CreateJobResponseDto,
        jobs_dtos::UpdateJobStatusDto,
        jobs_dtos::JobDto,
        jobs_dtos::JobOptionsDto,
        jobs_dtos::JobResponseDto,
        jobs_models::ApartmentSize,
        jobs_models::CleaningType,
        jobs_models::CleaningFrequency,
        jobs_models::JobStatus,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token handling"),
        (name = "locations", description = "Austrian location catalog"),
        (name = "cleaners", description = "Cleaner onboarding and browsing"),
        (name = "profiles", description = "Account profiles"),
        (name = "jobs", description = "Job postings and responses"),
    )
)]
pub struct ApiDoc;

/// Registers the bearer-token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Applies the configured title/version/description to the generated document
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// MARKETPLACE LIMITS
// =============================================================================

/// Lowest hourly rate a cleaner may advertise, in euros
pub const MIN_HOURLY_RATE_EUR: i64 = 15;

/// Highest hourly rate a cleaner may advertise, in euros
pub const MAX_HOURLY_RATE_EUR: i64 = 50;

/// Search radius applied when a caller filters by location without giving one,
/// matching the preselected option of the radius picker
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 15.0;

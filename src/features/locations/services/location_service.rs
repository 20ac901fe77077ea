use std::sync::Arc;

use crate::features::locations::models::{AustrianLocation, LocationCatalog};
use crate::shared::i18n::Locale;

/// Maximum number of autocomplete suggestions returned by a search.
/// When a result hits this cap the client shows a "keep typing" hint.
pub const SUGGESTION_LIMIT: usize = 12;

/// Queries shorter than this return nothing (single characters match too much)
pub const MIN_QUERY_CHARS: usize = 2;

/// Earth's radius in kilometers (for the Haversine formula)
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default span for the numeric postal-code proximity fallback. Austrian
/// postal codes are roughly regionally clustered, so a small numeric
/// difference is a cheap stand-in when a location is not in the catalog.
/// It is NOT geographically sound near province boundaries; callers that need
/// accuracy should make sure their locations resolve to catalog entries.
pub const DEFAULT_POSTAL_SPAN: i64 = 100;

/// Stateless lookups over the injected location catalog.
///
/// Every method is a pure, synchronous computation; the catalog is read-only
/// for the process lifetime, so concurrent callers need no coordination.
pub struct LocationService {
    catalog: Arc<LocationCatalog>,
    postal_span: i64,
}

impl LocationService {
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self {
            catalog,
            postal_span: DEFAULT_POSTAL_SPAN,
        }
    }

    /// Override the postal-code proximity span
    pub fn with_postal_span(mut self, postal_span: i64) -> Self {
        self.postal_span = postal_span;
        self
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Autocomplete search: case-insensitive substring match against city,
    /// district, display name and postal code, in catalog order, capped at
    /// [`SUGGESTION_LIMIT`].
    pub fn search(&self, query: &str) -> Vec<&AustrianLocation> {
        let normalized = query.trim().to_lowercase();
        if normalized.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        self.catalog
            .entries()
            .iter()
            .filter(|entry| {
                entry.city.to_lowercase().contains(&normalized)
                    || entry
                        .district
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&normalized))
                    || entry.display_name.to_lowercase().contains(&normalized)
                    || entry.postal_code.contains(&normalized)
            })
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Resolve a query to a single catalog entry: first entry whose city or
    /// display name equals the query (case-insensitive) or whose postal code
    /// equals it exactly. Used to turn URL parameters back into full records.
    pub fn find_exact(&self, query: &str) -> Option<&AustrianLocation> {
        let trimmed = query.trim();
        let normalized = trimmed.to_lowercase();

        self.catalog.entries().iter().find(|entry| {
            entry.city.to_lowercase() == normalized
                || entry.display_name.to_lowercase() == normalized
                || entry.postal_code == trimmed
        })
    }

    /// Great-circle distance between two WGS84 points in kilometers.
    ///
    /// Inputs are not range-checked; out-of-range degrees produce defined but
    /// meaningless results.
    pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Catalog entries within `radius_km` of the given center
    pub fn nearby(&self, center: &AustrianLocation, radius_km: f64) -> Vec<&AustrianLocation> {
        self.catalog
            .entries()
            .iter()
            .filter(|entry| {
                Self::haversine_km(center.lat, center.lng, entry.lat, entry.lng) <= radius_km
            })
            .collect()
    }

    /// Resolve a free-text city / postal code pair to a catalog entry
    pub fn resolve(&self, city: &str, postal_code: Option<&str>) -> Option<&AustrianLocation> {
        let normalized_city = city.trim().to_lowercase();

        self.catalog.entries().iter().find(|entry| {
            entry.city.to_lowercase() == normalized_city
                || postal_code.is_some_and(|p| entry.postal_code == p)
        })
    }

    /// True distance from `center` to a declared city / postal code, when the
    /// declared location resolves to a catalog entry
    pub fn distance_from(
        &self,
        center: &AustrianLocation,
        city: &str,
        postal_code: Option<&str>,
    ) -> Option<f64> {
        self.resolve(city, postal_code)
            .map(|entry| Self::haversine_km(center.lat, center.lng, entry.lat, entry.lng))
    }

    /// Decide whether a declared location counts as "nearby" the center.
    ///
    /// Two strategies, OR-ed together:
    /// 1. catalog distance: the declared location resolves to a catalog entry
    ///    within `radius_km`;
    /// 2. fallback for locations outside the catalog (user-entered free text):
    ///    exact city-name match, exact postal-code match, or a numeric
    ///    postal-code difference within the configured span.
    pub fn is_nearby(
        &self,
        center: &AustrianLocation,
        city: &str,
        postal_code: Option<&str>,
        radius_km: f64,
    ) -> bool {
        if let Some(distance) = self.distance_from(center, city, postal_code) {
            if distance <= radius_km {
                return true;
            }
        }

        if center.city.to_lowercase() == city.trim().to_lowercase() {
            return true;
        }

        if let Some(postal) = postal_code {
            if postal == center.postal_code {
                return true;
            }
            if let (Ok(a), Ok(b)) = (postal.parse::<i64>(), center.postal_code.parse::<i64>()) {
                if (a - b).abs() <= self.postal_span {
                    return true;
                }
            }
        }

        false
    }

    /// Human-readable distance: meters below one kilometer, one decimal above
    pub fn format_distance(distance_km: f64, locale: Locale) -> String {
        let suffix = match locale {
            Locale::De => "entfernt",
            Locale::En => "away",
        };
        if distance_km < 1.0 {
            format!("{}m {}", (distance_km * 1000.0).round() as i64, suffix)
        } else {
            format!("{:.1}km {}", distance_km, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LocationService {
        LocationService::new(Arc::new(LocationCatalog::bundled().unwrap()))
    }

    fn entry<'a>(service: &'a LocationService, display_name: &str) -> &'a AustrianLocation {
        service
            .catalog()
            .entries()
            .iter()
            .find(|e| e.display_name == display_name)
            .unwrap()
    }

    #[test]
    fn test_search_rejects_short_queries() {
        let service = service();
        assert!(service.search("").is_empty());
        assert!(service.search("s").is_empty());
        assert!(service.search("  s  ").is_empty());
        // Umlauts count as one character
        assert!(service.search("ö").is_empty());
    }

    #[test]
    fn test_search_caps_suggestions() {
        let service = service();
        // "50" appears in more than a dozen postal codes, so the cap binds
        let results = service.search("50");
        assert_eq!(results.len(), SUGGESTION_LIMIT);
        let results = service.search("an");
        assert!(results.len() <= SUGGESTION_LIMIT);
    }

    #[test]
    fn test_search_finds_salzburg_districts() {
        let service = service();
        let results = service.search("salz");
        let names: Vec<&str> = results.iter().map(|e| e.display_name.as_str()).collect();
        for district in [
            "Salzburg Altstadt",
            "Salzburg Süd",
            "Salzburg Nord",
            "Salzburg West",
            "Salzburg Ost",
        ] {
            assert!(names.contains(&district), "missing {}", district);
        }
    }

    #[test]
    fn test_search_matches_postal_code_substring() {
        let service = service();
        let results = service.search("5020");
        assert!(results.iter().any(|e| e.postal_code == "5020"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let service = service();
        assert_eq!(service.search("HALLEIN"), service.search("hallein"));
        assert!(!service.search("HALLEIN").is_empty());
    }

    #[test]
    fn test_search_preserves_catalog_order_and_is_idempotent() {
        let service = service();
        let first = service.search("wien");
        let second = service.search("wien");
        assert_eq!(first, second);
        // "Wien" precedes "Wiener Neustadt" in the catalog
        assert_eq!(first[0].display_name, "Wien");
    }

    #[test]
    fn test_find_exact_by_postal_code() {
        let service = service();
        let found = service.find_exact("5020").unwrap();
        assert_eq!(found.postal_code, "5020");
        assert_eq!(found.display_name, "Salzburg Altstadt");

        let wien = service.find_exact("1010").unwrap();
        assert_eq!(wien.display_name, "Wien");
    }

    #[test]
    fn test_find_exact_is_case_insensitive_for_names() {
        let service = service();
        assert_eq!(service.find_exact("wien").unwrap().postal_code, "1010");
        assert_eq!(
            service.find_exact("salzburg altstadt").unwrap().postal_code,
            "5020"
        );
        assert!(service.find_exact("nirgendwo").is_none());
    }

    #[test]
    fn test_find_exact_does_not_match_substrings() {
        let service = service();
        // "Hall" is a prefix of Hallein but not an exact match
        assert!(service.find_exact("Hall").is_none());
    }

    #[test]
    fn test_haversine_zero_for_identical_points() {
        let d = LocationService::haversine_km(47.8095, 13.0550, 47.8095, 13.0550);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = LocationService::haversine_km(47.8095, 13.0550, 48.2082, 16.3738);
        let b = LocationService::haversine_km(48.2082, 16.3738, 47.8095, 13.0550);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_salzburg_to_wien() {
        // Salzburg Altstadt -> Wien is roughly 254 km great-circle
        let d = LocationService::haversine_km(47.8095, 13.0550, 48.2082, 16.3738);
        assert!(d > 249.0 && d < 259.0, "got {}", d);
    }

    #[test]
    fn test_nearby_radius_filter() {
        let service = service();
        let wien = entry(&service, "Wien");

        let within_50 = service.nearby(wien, 50.0);
        let names: Vec<&str> = within_50.iter().map(|e| e.display_name.as_str()).collect();
        assert!(names.contains(&"Wien Leopoldstadt"));
        // Graz is ~170 km from Wien
        assert!(!names.contains(&"Graz"));
    }

    #[test]
    fn test_is_nearby_uses_catalog_distance() {
        let service = service();
        let altstadt = entry(&service, "Salzburg Altstadt");

        // Hallein is ~15 km south of the Altstadt
        assert!(service.is_nearby(altstadt, "Hallein", Some("5400"), 25.0));
        let wien = entry(&service, "Wien");
        assert!(!service.is_nearby(wien, "Graz", None, 50.0));
    }

    #[test]
    fn test_is_nearby_postal_span_fallback() {
        let service = service();
        let altstadt = entry(&service, "Salzburg Altstadt");

        // 5110 resolves to Oberndorf (~18 km, outside the radius), but the
        // numeric span still admits it
        assert!(service.is_nearby(altstadt, "Freilassing", Some("5110"), 15.0));
        // A far-away code fails both strategies
        assert!(!service.is_nearby(altstadt, "Irgendwo", Some("9999"), 15.0));
        // Non-numeric codes silently skip the span check
        assert!(!service.is_nearby(altstadt, "Irgendwo", Some("ABCD"), 15.0));
    }

    #[test]
    fn test_is_nearby_exact_matches_override_radius() {
        let service = service();
        let altstadt = entry(&service, "Salzburg Altstadt");

        // Same declared city counts as nearby regardless of radius
        assert!(service.is_nearby(altstadt, "salzburg", None, 0.0));
        assert!(service.is_nearby(altstadt, "Anderswo", Some("5020"), 0.0));
    }

    #[test]
    fn test_postal_span_is_configurable() {
        let catalog = Arc::new(LocationCatalog::bundled().unwrap());
        let strict = LocationService::new(Arc::clone(&catalog)).with_postal_span(0);
        let altstadt = strict
            .catalog()
            .entries()
            .iter()
            .find(|e| e.display_name == "Salzburg Altstadt")
            .unwrap()
            .clone();

        assert!(!strict.is_nearby(&altstadt, "Freilassing", Some("5110"), 15.0));
    }

    #[test]
    fn test_resolve_prefers_city_match() {
        let service = service();
        let resolved = service.resolve("HALLEIN", None).unwrap();
        assert_eq!(resolved.postal_code, "5400");

        // Unknown city falls back to the postal code
        let resolved = service.resolve("Unbekannt", Some("8010")).unwrap();
        assert_eq!(resolved.city, "Graz");

        assert!(service.resolve("Unbekannt", None).is_none());
    }

    #[test]
    fn test_distance_from_unresolvable_is_none() {
        let service = service();
        let altstadt = entry(&service, "Salzburg Altstadt");
        assert!(service
            .distance_from(altstadt, "Atlantis", Some("0000"))
            .is_none());
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(
            LocationService::format_distance(0.85, Locale::De),
            "850m entfernt"
        );
        assert_eq!(
            LocationService::format_distance(2.53, Locale::De),
            "2.5km entfernt"
        );
        assert_eq!(
            LocationService::format_distance(0.85, Locale::En),
            "850m away"
        );
        assert_eq!(
            LocationService::format_distance(12.0, Locale::En),
            "12.0km away"
        );
    }

    #[test]
    fn test_search_with_fixture_catalog() {
        // The catalog is injected, so tests can run against fixtures
        let fixture = LocationCatalog::new(vec![AustrianLocation {
            city: "Testdorf".to_string(),
            district: None,
            postal_code: "5999".to_string(),
            state: "Salzburg".to_string(),
            lat: 47.0,
            lng: 13.0,
            display_name: "Testdorf".to_string(),
        }]);
        let service = LocationService::new(Arc::new(fixture));
        assert_eq!(service.search("test").len(), 1);
        assert!(service.find_exact("5999").is_some());
    }
}

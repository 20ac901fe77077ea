use serde::{Deserialize, Serialize};

/// One entry of the Austrian location reference data.
///
/// `postal_code` is digits-as-text and deliberately not unique: districts of one
/// municipality may share a code. `display_name` is the precomputed label shown
/// in suggestion lists ("Salzburg Altstadt", or just the city name when the
/// municipality has no districts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AustrianLocation {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub postal_code: String,
    pub state: String,
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

/// The immutable location catalog, loaded once at startup and injected into
/// consumers so tests can substitute fixtures.
///
/// The bundled data set (~70 municipalities, weighted toward the Salzburg
/// region) was pre-fetched from a postal-code API and checked in.
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    entries: Vec<AustrianLocation>,
}

const BUNDLED_DATA: &str = include_str!("../data/austrian_locations.json");

impl LocationCatalog {
    pub fn new(entries: Vec<AustrianLocation>) -> Self {
        Self { entries }
    }

    /// Parse the checked-in data file
    pub fn bundled() -> Result<Self, serde_json::Error> {
        let entries: Vec<AustrianLocation> = serde_json::from_str(BUNDLED_DATA)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AustrianLocation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = LocationCatalog::bundled().expect("bundled data must parse");
        assert_eq!(catalog.len(), 70);
    }

    #[test]
    fn test_bundled_catalog_has_salzburg_districts() {
        let catalog = LocationCatalog::bundled().unwrap();
        let districts: Vec<&str> = catalog
            .entries()
            .iter()
            .filter(|e| e.city == "Salzburg")
            .filter_map(|e| e.district.as_deref())
            .collect();
        assert_eq!(districts, vec!["Altstadt", "Süd", "Nord", "West", "Ost"]);
    }

    #[test]
    fn test_postal_codes_are_not_unique() {
        // Faistenau and Hintersee share 5324, Golling and Scheffau share 5440
        let catalog = LocationCatalog::bundled().unwrap();
        let shared: Vec<&AustrianLocation> = catalog
            .entries()
            .iter()
            .filter(|e| e.postal_code == "5324")
            .collect();
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_all_postal_codes_are_four_digits() {
        let catalog = LocationCatalog::bundled().unwrap();
        for entry in catalog.entries() {
            assert_eq!(
                entry.postal_code.len(),
                4,
                "bad postal code for {}",
                entry.display_name
            );
            assert!(entry.postal_code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

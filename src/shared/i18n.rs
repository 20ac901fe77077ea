//! Closed vocabularies shared across the marketplace, with their display labels.
//!
//! The UI is bilingual (German-first), so every code carries exactly one German
//! and one English label here instead of per-screen lookup maps.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display locale for label lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Self::De
    }
}

/// Languages a cleaner can offer service in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Fr,
    It,
    Es,
    Hr,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::De,
        Language::En,
        Language::Fr,
        Language::It,
        Language::Es,
        Language::Hr,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Es => "es",
            Language::Hr => "hr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Languages are labelled by their own name in both locales
    pub fn label(self, _locale: Locale) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
            Language::Fr => "Français",
            Language::It => "Italiano",
            Language::Es => "Español",
            Language::Hr => "Hrvatski",
        }
    }
}

/// Cleaning services a cleaner can offer and a job can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    RegularCleaning,
    DeepCleaning,
    MoveCleaning,
    OfficeCleaning,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::RegularCleaning,
        ServiceKind::DeepCleaning,
        ServiceKind::MoveCleaning,
        ServiceKind::OfficeCleaning,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ServiceKind::RegularCleaning => "regular_cleaning",
            ServiceKind::DeepCleaning => "deep_cleaning",
            ServiceKind::MoveCleaning => "move_cleaning",
            ServiceKind::OfficeCleaning => "office_cleaning",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ServiceKind::RegularCleaning, Locale::De) => "Regelmäßige Reinigung",
            (ServiceKind::RegularCleaning, Locale::En) => "Regular cleaning",
            (ServiceKind::DeepCleaning, Locale::De) => "Grundreinigung",
            (ServiceKind::DeepCleaning, Locale::En) => "Deep cleaning",
            (ServiceKind::MoveCleaning, Locale::De) => "Umzugsreinigung",
            (ServiceKind::MoveCleaning, Locale::En) => "Move-out cleaning",
            (ServiceKind::OfficeCleaning, Locale::De) => "Büroreinigung",
            (ServiceKind::OfficeCleaning, Locale::En) => "Office cleaning",
        }
    }
}

/// Days of the week a cleaner can mark as available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Weekday::Monday, Locale::De) => "Montag",
            (Weekday::Monday, Locale::En) => "Monday",
            (Weekday::Tuesday, Locale::De) => "Dienstag",
            (Weekday::Tuesday, Locale::En) => "Tuesday",
            (Weekday::Wednesday, Locale::De) => "Mittwoch",
            (Weekday::Wednesday, Locale::En) => "Wednesday",
            (Weekday::Thursday, Locale::De) => "Donnerstag",
            (Weekday::Thursday, Locale::En) => "Thursday",
            (Weekday::Friday, Locale::De) => "Freitag",
            (Weekday::Friday, Locale::En) => "Friday",
            (Weekday::Saturday, Locale::De) => "Samstag",
            (Weekday::Saturday, Locale::En) => "Saturday",
            (Weekday::Sunday, Locale::De) => "Sonntag",
            (Weekday::Sunday, Locale::En) => "Sunday",
        }
    }
}

/// Parse a list of stored codes into the closed set, rejecting unknown entries.
/// Used when request DTOs carry raw code lists.
pub fn parse_codes<T, F>(codes: &[String], parse: F, what: &str) -> Result<Vec<T>, String>
where
    F: Fn(&str) -> Option<T>,
{
    let mut out = Vec::with_capacity(codes.len());
    for code in codes {
        match parse(code) {
            Some(v) => out.push(v),
            None => return Err(format!("Unknown {}: '{}'", what, code)),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_codes_round_trip() {
        for service in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_code(service.code()), Some(service));
        }
        assert_eq!(ServiceKind::from_code("window_cleaning"), None);
    }

    #[test]
    fn test_service_labels_localized() {
        assert_eq!(
            ServiceKind::DeepCleaning.label(Locale::De),
            "Grundreinigung"
        );
        assert_eq!(ServiceKind::DeepCleaning.label(Locale::En), "Deep cleaning");
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn test_weekday_codes_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_code(day.code()), Some(day));
        }
    }

    #[test]
    fn test_parse_codes_rejects_unknown() {
        let codes = vec!["de".to_string(), "klingon".to_string()];
        let result = parse_codes(&codes, Language::from_code, "language");
        assert!(result.is_err());

        let codes = vec!["de".to_string(), "hr".to_string()];
        let result = parse_codes(&codes, Language::from_code, "language").unwrap();
        assert_eq!(result, vec![Language::De, Language::Hr]);
    }
}

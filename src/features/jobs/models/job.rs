use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "apartment_size", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApartmentSize {
    Studio,
    TwoRoom,
    ThreeRoom,
    FourRoom,
}

impl ApartmentSize {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ApartmentSize::Studio, Locale::De) => "Garconniere",
            (ApartmentSize::Studio, Locale::En) => "Studio",
            (ApartmentSize::TwoRoom, Locale::De) => "2-Zimmer-Wohnung",
            (ApartmentSize::TwoRoom, Locale::En) => "2-room apartment",
            (ApartmentSize::ThreeRoom, Locale::De) => "3-Zimmer-Wohnung",
            (ApartmentSize::ThreeRoom, Locale::En) => "3-room apartment",
            (ApartmentSize::FourRoom, Locale::De) => "4+ Zimmer-Wohnung",
            (ApartmentSize::FourRoom, Locale::En) => "4+ room apartment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "cleaning_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CleaningType {
    Regular,
    Deep,
    Move,
}

impl CleaningType {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CleaningType::Regular, Locale::De) => "Regelmäßige Reinigung",
            (CleaningType::Regular, Locale::En) => "Regular cleaning",
            (CleaningType::Deep, Locale::De) => "Grundreinigung",
            (CleaningType::Deep, Locale::En) => "Deep cleaning",
            (CleaningType::Move, Locale::De) => "Umzugsreinigung",
            (CleaningType::Move, Locale::En) => "Move-out cleaning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "cleaning_frequency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CleaningFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Once,
}

impl CleaningFrequency {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CleaningFrequency::Weekly, Locale::De) => "Wöchentlich",
            (CleaningFrequency::Weekly, Locale::En) => "Weekly",
            (CleaningFrequency::Biweekly, Locale::De) => "Alle zwei Wochen",
            (CleaningFrequency::Biweekly, Locale::En) => "Every two weeks",
            (CleaningFrequency::Monthly, Locale::De) => "Monatlich",
            (CleaningFrequency::Monthly, Locale::En) => "Monthly",
            (CleaningFrequency::Once, Locale::De) => "Einmalig",
            (CleaningFrequency::Once, Locale::En) => "One-time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Filled,
    Expired,
}

/// Database model for a job posting
#[derive(Debug, Clone, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub title: String,
    pub description: String,
    pub apartment_size: ApartmentSize,
    pub cleaning_type: CleaningType,
    pub frequency: CleaningFrequency,
    pub location_city: String,
    pub location_postal_code: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub budget_cents: Option<i32>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job row joined with its response count (owner's listing view)
#[derive(Debug, Clone, FromRow)]
pub struct JobWithResponses {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub title: String,
    pub description: String,
    pub apartment_size: ApartmentSize,
    pub cleaning_type: CleaningType,
    pub frequency: CleaningFrequency,
    pub location_city: String,
    pub location_postal_code: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub budget_cents: Option<i32>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub response_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apartment_size_serializes_snake_case() {
        let json = serde_json::to_string(&ApartmentSize::TwoRoom).unwrap();
        assert_eq!(json, "\"two_room\"");
        let parsed: ApartmentSize = serde_json::from_str("\"four_room\"").unwrap();
        assert_eq!(parsed, ApartmentSize::FourRoom);
    }

    #[test]
    fn test_labels_cover_both_locales() {
        assert_eq!(
            CleaningType::Move.label(Locale::De),
            "Umzugsreinigung"
        );
        assert_eq!(CleaningType::Move.label(Locale::En), "Move-out cleaning");
        assert_eq!(
            CleaningFrequency::Biweekly.label(Locale::De),
            "Alle zwei Wochen"
        );
    }
}

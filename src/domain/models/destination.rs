use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};
use std::fmt;
use std::str::FromStr;
use crate::domain::models::nullable;
use crate::domain::services::schema::Schema;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    Budget,
    Moderate,
    Luxury,
}

impl FromStr for PriceRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Budget" => Ok(PriceRange::Budget),
            "Moderate" => Ok(PriceRange::Moderate),
            "Luxury" => Ok(PriceRange::Luxury),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceRange::Budget => "Budget",
            PriceRange::Moderate => "Moderate",
            PriceRange::Luxury => "Luxury",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Destination {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image: String,
    #[serde(rename = "bestTimeToVisit", skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    pub activities: Json<Vec<String>>,
    #[serde(rename = "priceRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A destination document as submitted by a client. Every field is optional
/// so the same shape serves inserts and field-merging updates; the nullable
/// ones distinguish "not sent" (`None`) from "cleared" (`Some(None)`).
#[derive(Debug, Deserialize, Default)]
pub struct DestinationDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "bestTimeToVisit", default, deserialize_with = "nullable")]
    pub best_time_to_visit: Option<Option<String>>,
    pub activities: Option<Vec<String>>,
    #[serde(rename = "priceRange", default, deserialize_with = "nullable")]
    pub price_range: Option<Option<String>>,
    pub featured: Option<bool>,
}

impl DestinationDraft {
    pub fn into_destination(self) -> Result<Destination, AppError> {
        self.validate(Uuid::new_v4().to_string(), Utc::now())
    }

    /// Fields present in the draft win; the rest keep their stored value.
    pub fn merge_into(self, current: Destination) -> Result<Destination, AppError> {
        let id = current.id.clone();
        let created_at = current.created_at;
        self.or(DestinationDraft::from(current)).validate(id, created_at)
    }

    fn or(self, base: DestinationDraft) -> DestinationDraft {
        DestinationDraft {
            name: self.name.or(base.name),
            description: self.description.or(base.description),
            location: self.location.or(base.location),
            image: self.image.or(base.image),
            best_time_to_visit: self.best_time_to_visit.or(base.best_time_to_visit),
            activities: self.activities.or(base.activities),
            price_range: self.price_range.or(base.price_range),
            featured: self.featured.or(base.featured),
        }
    }

    fn validate(self, id: String, created_at: DateTime<Utc>) -> Result<Destination, AppError> {
        let mut schema = Schema::new("Destination");
        let name = schema.required_text("name", self.name);
        let description = schema.required_text("description", self.description);
        let location = schema.required_text("location", self.location);
        let image = schema.required_text("image", self.image);
        let price_range = schema.one_of::<PriceRange>("priceRange", self.price_range.flatten());
        schema.finish()?;

        Ok(Destination {
            id,
            name,
            description,
            location,
            image,
            best_time_to_visit: self.best_time_to_visit.flatten(),
            activities: Json(self.activities.unwrap_or_default()),
            price_range,
            featured: self.featured.unwrap_or(false),
            created_at,
        })
    }
}

impl From<Destination> for DestinationDraft {
    fn from(d: Destination) -> Self {
        Self {
            name: Some(d.name),
            description: Some(d.description),
            location: Some(d.location),
            image: Some(d.image),
            best_time_to_visit: Some(d.best_time_to_visit),
            activities: Some(d.activities.0),
            price_range: Some(d.price_range.map(|p| p.to_string())),
            featured: Some(d.featured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DestinationDraft {
        DestinationDraft {
            name: Some("Bequia".into()),
            description: Some("Quiet island".into()),
            location: Some("Grenadines".into()),
            image: Some("/img/bequia.jpg".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied_on_insert() {
        let d = draft().into_destination().unwrap();
        assert!(!d.featured);
        assert!(d.activities.0.is_empty());
        assert!(d.price_range.is_none());
        assert!(Uuid::parse_str(&d.id).is_ok());
    }

    #[test]
    fn test_rejects_unknown_price_range() {
        let mut d = draft();
        d.price_range = Some(Some("Cheap".into()));
        assert!(matches!(d.into_destination(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let mut original = draft();
        original.price_range = Some(Some("Luxury".into()));
        let stored = original.into_destination().unwrap();

        let patch = DestinationDraft { featured: Some(true), ..Default::default() };
        let merged = patch.merge_into(stored.clone()).unwrap();

        assert_eq!(merged.id, stored.id);
        assert_eq!(merged.created_at, stored.created_at);
        assert_eq!(merged.name, "Bequia");
        assert_eq!(merged.price_range, Some(PriceRange::Luxury));
        assert!(merged.featured);
    }

    #[test]
    fn test_merge_cannot_blank_required_field() {
        let stored = draft().into_destination().unwrap();
        let patch = DestinationDraft { name: Some(String::new()), ..Default::default() };
        assert!(patch.merge_into(stored).is_err());
    }

    #[test]
    fn test_null_clears_optional_fields() {
        let mut original = draft();
        original.price_range = Some(Some("Budget".into()));
        original.best_time_to_visit = Some(Some("December to April".into()));
        let stored = original.into_destination().unwrap();

        let patch: DestinationDraft = serde_json::from_str(r#"{"priceRange": null}"#).unwrap();
        assert_eq!(patch.price_range, Some(None));
        assert_eq!(patch.best_time_to_visit, None);

        let merged = patch.merge_into(stored).unwrap();
        assert_eq!(merged.price_range, None);
        assert_eq!(merged.best_time_to_visit.as_deref(), Some("December to April"));
    }
}

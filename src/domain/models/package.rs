use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};
use crate::domain::models::destination::Destination;
use crate::domain::services::schema::Schema;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TripDuration {
    pub days: Option<i32>,
    pub nights: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Stored form: `destinations` holds destination ids in display order.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub destinations: Json<Vec<String>>,
    pub duration: Json<TripDuration>,
    pub price: f64,
    pub inclusions: Json<Vec<String>>,
    pub exclusions: Json<Vec<String>>,
    pub itinerary: Json<Vec<ItineraryDay>>,
    pub images: Json<Vec<String>>,
    pub featured: bool,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Response form with the destination references replaced by documents.
#[derive(Debug, Serialize, Clone)]
pub struct PackageView {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub destinations: Vec<Destination>,
    pub duration: TripDuration,
    pub price: f64,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub images: Vec<String>,
    pub featured: bool,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl Package {
    pub fn with_destinations(self, destinations: Vec<Destination>) -> PackageView {
        PackageView {
            id: self.id,
            title: self.title,
            description: self.description,
            destinations,
            duration: self.duration.0,
            price: self.price,
            inclusions: self.inclusions.0,
            exclusions: self.exclusions.0,
            itinerary: self.itinerary.0,
            images: self.images.0,
            featured: self.featured,
            available: self.available,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PackageDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub destinations: Option<Vec<String>>,
    pub duration: Option<TripDuration>,
    pub price: Option<f64>,
    pub inclusions: Option<Vec<String>>,
    pub exclusions: Option<Vec<String>>,
    pub itinerary: Option<Vec<ItineraryDay>>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub available: Option<bool>,
}

impl PackageDraft {
    pub fn into_package(self) -> Result<Package, AppError> {
        self.validate(Uuid::new_v4().to_string(), Utc::now())
    }

    pub fn merge_into(self, current: Package) -> Result<Package, AppError> {
        let id = current.id.clone();
        let created_at = current.created_at;
        self.or(PackageDraft::from(current)).validate(id, created_at)
    }

    fn or(self, base: PackageDraft) -> PackageDraft {
        PackageDraft {
            title: self.title.or(base.title),
            description: self.description.or(base.description),
            destinations: self.destinations.or(base.destinations),
            duration: self.duration.or(base.duration),
            price: self.price.or(base.price),
            inclusions: self.inclusions.or(base.inclusions),
            exclusions: self.exclusions.or(base.exclusions),
            itinerary: self.itinerary.or(base.itinerary),
            images: self.images.or(base.images),
            featured: self.featured.or(base.featured),
            available: self.available.or(base.available),
        }
    }

    fn validate(self, id: String, created_at: DateTime<Utc>) -> Result<Package, AppError> {
        let mut schema = Schema::new("Package");
        let title = schema.required_text("title", self.title);
        let description = schema.required_text("description", self.description);
        let price = schema.required("price", self.price.filter(|p| p.is_finite()));
        schema.finish()?;

        Ok(Package {
            id,
            title,
            description,
            destinations: Json(self.destinations.unwrap_or_default()),
            duration: Json(self.duration.unwrap_or_default()),
            price: price.unwrap_or_default(),
            inclusions: Json(self.inclusions.unwrap_or_default()),
            exclusions: Json(self.exclusions.unwrap_or_default()),
            itinerary: Json(self.itinerary.unwrap_or_default()),
            images: Json(self.images.unwrap_or_default()),
            featured: self.featured.unwrap_or(false),
            available: self.available.unwrap_or(true),
            created_at,
        })
    }
}

impl From<Package> for PackageDraft {
    fn from(p: Package) -> Self {
        Self {
            title: Some(p.title),
            description: Some(p.description),
            destinations: Some(p.destinations.0),
            duration: Some(p.duration.0),
            price: Some(p.price),
            inclusions: Some(p.inclusions.0),
            exclusions: Some(p.exclusions.0),
            itinerary: Some(p.itinerary.0),
            images: Some(p.images.0),
            featured: Some(p.featured),
            available: Some(p.available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_required() {
        let draft = PackageDraft {
            title: Some("Island Hopper".into()),
            description: Some("Seven islands in seven days".into()),
            ..Default::default()
        };
        let err = draft.into_package().unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_available_defaults_true() {
        let pkg = PackageDraft {
            title: Some("Island Hopper".into()),
            description: Some("Seven islands in seven days".into()),
            price: Some(1299.0),
            ..Default::default()
        }
        .into_package()
        .unwrap();
        assert!(pkg.available);
        assert!(!pkg.featured);
        assert_eq!(pkg.duration.0, TripDuration::default());
    }

    #[test]
    fn test_merge_replaces_destination_list() {
        let stored = PackageDraft {
            title: Some("Island Hopper".into()),
            description: Some("Seven islands".into()),
            price: Some(900.0),
            destinations: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        }
        .into_package()
        .unwrap();

        let patch = PackageDraft { destinations: Some(vec!["c".into(), "a".into()]), ..Default::default() };
        let merged = patch.merge_into(stored).unwrap();
        assert_eq!(merged.destinations.0, vec!["c".to_string(), "a".to_string()]);
        assert_eq!(merged.price, 900.0);
    }
}

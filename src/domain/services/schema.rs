//! Write-time document checks shared by every collection.
//!
//! A [`Schema`] collects every failure for one document and reports them
//! together, in the form `<Entity> validation failed: <path>: <reason>, ...`.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

pub struct Schema {
    entity: &'static str,
    failures: Vec<String>,
}

impl Schema {
    pub fn new(entity: &'static str) -> Self {
        Self { entity, failures: Vec::new() }
    }

    /// Blank strings count as missing.
    pub fn required_text(&mut self, path: &str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.fail(path, "is required");
                String::new()
            }
        }
    }

    pub fn required<T>(&mut self, path: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.fail(path, "is required");
        }
        value
    }

    pub fn within(&mut self, path: &str, value: Option<i32>, min: i32, max: i32) -> Option<i32> {
        if let Some(v) = value
            && (v < min || v > max) {
                self.fail(path, &format!("must be between {} and {}, got {}", min, max, v));
            }
        value
    }

    pub fn one_of<T: FromStr>(&mut self, path: &str, value: Option<String>) -> Option<T> {
        let raw = value?;
        match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.fail(path, &format!("`{}` is not a valid value", raw));
                None
            }
        }
    }

    /// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
    pub fn date(&mut self, path: &str, value: Option<String>) -> Option<DateTime<Utc>> {
        let raw = value?;
        match parse_date(&raw) {
            Some(parsed) => Some(parsed),
            None => {
                self.fail(path, &format!("`{}` is not a valid date", raw));
                None
            }
        }
    }

    pub fn required_date(&mut self, path: &str, value: Option<String>) -> Option<DateTime<Utc>> {
        if value.is_none() {
            self.fail(path, "is required");
            return None;
        }
        self.date(path, value)
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(AppError::Validation(format!(
            "{} validation failed: {}",
            self.entity,
            self.failures.join(", ")
        )))
    }

    fn fail(&mut self, path: &str, reason: &str) {
        self.failures.push(format!("{}: Path `{}` {}", path, path, reason));
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_collects_all_failures_in_one_message() {
        let mut schema = Schema::new("Destination");
        schema.required_text("name", None);
        schema.required_text("image", Some("   ".to_string()));
        let err = schema.finish().unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.starts_with("Destination validation failed: "));
                assert!(msg.contains("name: Path `name` is required"));
                assert!(msg.contains("image: Path `image` is required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut schema = Schema::new("Comment");
        schema.within("rating", Some(1), 1, 5);
        schema.within("rating", Some(5), 1, 5);
        schema.within("rating", None, 1, 5);
        assert!(schema.finish().is_ok());

        let mut schema = Schema::new("Comment");
        schema.within("rating", Some(6), 1, 5);
        assert!(schema.finish().is_err());
    }

    #[test]
    fn test_dates_accept_plain_and_rfc3339() {
        let mut schema = Schema::new("Booking");
        let plain = schema.date("travelDate", Some("2025-07-14".to_string())).unwrap();
        assert_eq!((plain.year(), plain.month(), plain.day()), (2025, 7, 14));

        let full = schema.date("travelDate", Some("2025-07-14T09:30:00+02:00".to_string())).unwrap();
        assert_eq!(full.to_rfc3339(), "2025-07-14T07:30:00+00:00");
        assert!(schema.finish().is_ok());

        let mut schema = Schema::new("Booking");
        assert!(schema.date("travelDate", Some("next tuesday".to_string())).is_none());
        assert!(schema.finish().is_err());
    }
}

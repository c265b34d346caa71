use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::domain::services::schema::Schema;
use crate::error::AppError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CommentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i32>,
    pub page: Option<String>,
}

impl CommentDraft {
    /// New comments always wait for moderation.
    pub fn into_comment(self) -> Result<Comment, AppError> {
        let mut schema = Schema::new("Comment");
        let name = schema.required_text("name", self.name);
        let email = schema.required_text("email", self.email);
        let comment = schema.required_text("comment", self.comment);
        let rating = schema.within("rating", self.rating, MIN_RATING, MAX_RATING);
        schema.finish()?;

        Ok(Comment {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            comment,
            rating,
            approved: false,
            page: self.page,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: Option<i32>) -> CommentDraft {
        CommentDraft {
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            comment: Some("Loved the boat trip".into()),
            rating,
            page: Some("home".into()),
        }
    }

    #[test]
    fn test_rating_outside_bounds_rejected() {
        assert!(draft(Some(0)).into_comment().is_err());
        assert!(draft(Some(6)).into_comment().is_err());
        assert_eq!(draft(Some(5)).into_comment().unwrap().rating, Some(5));
    }

    #[test]
    fn test_rating_optional_and_unapproved_by_default() {
        let c = draft(None).into_comment().unwrap();
        assert!(c.rating.is_none());
        assert!(!c.approved);
    }
}

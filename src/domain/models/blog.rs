use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};
use crate::domain::models::nullable;
use crate::domain::services::schema::Schema;
use crate::error::AppError;

pub const DEFAULT_AUTHOR: &str = "VincyWeb";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Json<Vec<String>>,
    pub featured: bool,
    pub published: bool,
    pub publish_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub excerpt: Option<Option<String>>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub image: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub publish_date: Option<String>,
}

impl BlogDraft {
    pub fn into_blog(self) -> Result<Blog, AppError> {
        let now = Utc::now();
        self.validate(Uuid::new_v4().to_string(), now, now)
    }

    pub fn merge_into(self, current: Blog) -> Result<Blog, AppError> {
        let id = current.id.clone();
        let created_at = current.created_at;
        let publish_date = current.publish_date;
        self.or(BlogDraft::from(current)).validate(id, publish_date, created_at)
    }

    fn or(self, base: BlogDraft) -> BlogDraft {
        BlogDraft {
            title: self.title.or(base.title),
            content: self.content.or(base.content),
            excerpt: self.excerpt.or(base.excerpt),
            author: self.author.or(base.author),
            image: self.image.or(base.image),
            tags: self.tags.or(base.tags),
            featured: self.featured.or(base.featured),
            published: self.published.or(base.published),
            publish_date: self.publish_date.or(base.publish_date),
        }
    }

    fn validate(self, id: String, default_publish_date: DateTime<Utc>, created_at: DateTime<Utc>) -> Result<Blog, AppError> {
        let mut schema = Schema::new("Blog");
        let title = schema.required_text("title", self.title);
        let content = schema.required_text("content", self.content);
        let publish_date = schema.date("publish_date", self.publish_date);
        schema.finish()?;

        Ok(Blog {
            id,
            title,
            content,
            excerpt: self.excerpt.flatten(),
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            image: self.image.flatten(),
            tags: Json(self.tags.unwrap_or_default()),
            featured: self.featured.unwrap_or(false),
            published: self.published.unwrap_or(false),
            publish_date: publish_date.unwrap_or(default_publish_date),
            created_at,
        })
    }
}

impl From<Blog> for BlogDraft {
    fn from(b: Blog) -> Self {
        Self {
            title: Some(b.title),
            content: Some(b.content),
            excerpt: Some(b.excerpt),
            author: Some(b.author),
            image: Some(b.image),
            tags: Some(b.tags.0),
            featured: Some(b.featured),
            published: Some(b.published),
            publish_date: Some(b.publish_date.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_author_and_unpublished() {
        let blog = BlogDraft {
            title: Some("Carnival season".into()),
            content: Some("Vincy Mas runs through July.".into()),
            ..Default::default()
        }
        .into_blog()
        .unwrap();

        assert_eq!(blog.author, DEFAULT_AUTHOR);
        assert!(!blog.published);
        assert!(!blog.featured);
        assert_eq!(blog.publish_date, blog.created_at);
    }

    #[test]
    fn test_explicit_publish_date_kept() {
        let blog = BlogDraft {
            title: Some("Dry season".into()),
            content: Some("January to May.".into()),
            publish_date: Some("2024-01-15".into()),
            ..Default::default()
        }
        .into_blog()
        .unwrap();
        assert_eq!(blog.publish_date.to_rfc3339(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_publish_toggle_merges() {
        let stored = BlogDraft {
            title: Some("Sailing".into()),
            content: Some("Trade winds.".into()),
            author: Some("Kendra".into()),
            ..Default::default()
        }
        .into_blog()
        .unwrap();

        let merged = BlogDraft { published: Some(true), ..Default::default() }
            .merge_into(stored.clone())
            .unwrap();
        assert!(merged.published);
        assert_eq!(merged.author, "Kendra");
        assert_eq!(merged.publish_date, stored.publish_date);
    }
}

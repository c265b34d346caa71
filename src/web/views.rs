//! Card view-models for the public landing page.

use serde::Serialize;
use chrono::{DateTime, Utc};
use crate::domain::models::{
    destination::Destination, package::PackageView, blog::Blog, comment::{Comment, MAX_RATING},
};

pub const DESTINATION_SNIPPET_CHARS: usize = 100;
pub const PACKAGE_SNIPPET_CHARS: usize = 120;
pub const BLOG_SNIPPET_CHARS: usize = 150;

pub const PACKAGE_PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
pub const BLOG_PLACEHOLDER_IMAGE: &str = "/images/blog-placeholder.jpg";

/// First `max_chars` characters followed by `...`. The ellipsis is always
/// appended, so every card snippet reads the same way.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let end = text.char_indices().nth(max_chars).map_or(text.len(), |(byte_idx, _)| byte_idx);
    format!("{}...", &text[..end])
}

pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

#[derive(Debug, Serialize)]
pub struct DestinationCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub snippet: String,
    pub location: String,
    pub price_range: String,
}

impl From<&Destination> for DestinationCard {
    fn from(d: &Destination) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            image: d.image.clone(),
            snippet: truncate_text(&d.description, DESTINATION_SNIPPET_CHARS),
            location: d.location.clone(),
            price_range: d.price_range.map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PackageCard {
    pub id: String,
    pub title: String,
    pub image: String,
    pub snippet: String,
    pub duration: String,
    pub destination_count: usize,
    pub price: String,
    /// Booking from a card is not wired up yet; the button only explains that.
    pub booking_notice: String,
}

impl From<&PackageView> for PackageCard {
    fn from(p: &PackageView) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            image: p.images.first().cloned().unwrap_or_else(|| PACKAGE_PLACEHOLDER_IMAGE.to_string()),
            snippet: truncate_text(&p.description, PACKAGE_SNIPPET_CHARS),
            duration: format!(
                "{} Days / {} Nights",
                p.duration.days.unwrap_or(0),
                p.duration.nights.unwrap_or(0)
            ),
            destination_count: p.destinations.len(),
            price: format!("${}", p.price),
            booking_notice: format!(
                "Booking package: {}\n\nIn a full implementation, this would open a booking form.",
                p.id
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogCard {
    pub id: String,
    pub title: String,
    pub image: String,
    pub snippet: String,
    pub author: String,
    pub published_on: String,
    pub read_notice: String,
}

impl From<&Blog> for BlogCard {
    fn from(b: &Blog) -> Self {
        let snippet = match b.excerpt.as_deref() {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => truncate_text(&b.content, BLOG_SNIPPET_CHARS),
        };
        Self {
            id: b.id.clone(),
            title: b.title.clone(),
            image: b.image.clone().unwrap_or_else(|| BLOG_PLACEHOLDER_IMAGE.to_string()),
            snippet,
            author: b.author.clone(),
            published_on: short_date(&b.publish_date),
            read_notice: format!(
                "Viewing blog post: {}\n\nIn a full implementation, this would open the full blog post.",
                b.id
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentItem {
    pub name: String,
    pub comment: String,
    pub stars: String,
    pub posted_on: String,
}

impl From<&Comment> for CommentItem {
    fn from(c: &Comment) -> Self {
        let stars = c
            .rating
            .map(|r| {
                let filled = r.clamp(0, MAX_RATING) as usize;
                format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
            })
            .unwrap_or_default();
        Self {
            name: c.name.clone(),
            comment: c.comment.clone(),
            stars,
            posted_on: short_date(&c.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::package::{PackageDraft, TripDuration};

    #[test]
    fn test_truncate_always_marks_snippet() {
        assert_eq!(truncate_text("short", 10), "short...");
        assert_eq!(truncate_text("", 10), "...");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("ééééé", 2), "éé...");
    }

    #[test]
    fn test_package_card_falls_back_to_placeholder() {
        let view = PackageDraft {
            title: Some("Grenadines Sail".into()),
            description: Some("x".repeat(200)),
            price: Some(1450.0),
            duration: Some(TripDuration { days: Some(5), nights: Some(4) }),
            ..Default::default()
        }
        .into_package()
        .unwrap()
        .with_destinations(vec![]);

        let card = PackageCard::from(&view);
        assert_eq!(card.image, PACKAGE_PLACEHOLDER_IMAGE);
        assert_eq!(card.duration, "5 Days / 4 Nights");
        assert_eq!(card.price, "$1450");
        assert_eq!(card.snippet.chars().count(), PACKAGE_SNIPPET_CHARS + 3);
        assert!(card.booking_notice.contains(&view.id));
    }
}

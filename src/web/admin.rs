//! View-models for the admin panel.
//!
//! The destinations panel owns the list it was built from; editing looks the
//! record up there and flips the form into [`FormMode::Edit`], which changes
//! where the form submits and what its button says.

use serde::Serialize;
use crate::domain::models::{
    destination::Destination, comment::Comment, booking::BookingView,
};
use crate::web::views::short_date;

pub const DESTINATIONS_ENDPOINT: &str = "/api/admin/destinations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Destination",
            FormMode::Edit { .. } => "Update Destination",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            FormMode::Create => "POST",
            FormMode::Edit { .. } => "PUT",
        }
    }

    pub fn action(&self) -> String {
        match self {
            FormMode::Create => DESTINATIONS_ENDPOINT.to_string(),
            FormMode::Edit { id } => format!("{}/{}", DESTINATIONS_ENDPOINT, id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DestinationForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub price_range: String,
    pub best_time_to_visit: String,
    pub featured: bool,
}

impl From<&Destination> for DestinationForm {
    fn from(d: &Destination) -> Self {
        Self {
            name: d.name.clone(),
            location: d.location.clone(),
            description: d.description.clone(),
            image: d.image.clone(),
            price_range: d.price_range.map(|p| p.to_string()).unwrap_or_default(),
            best_time_to_visit: d.best_time_to_visit.clone().unwrap_or_default(),
            featured: d.featured,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DestinationRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub price_range: String,
    pub featured: &'static str,
}

#[derive(Debug, Serialize)]
struct FormState<'a> {
    method: &'static str,
    action: String,
    submit_label: &'static str,
    editing: bool,
    fields: &'a DestinationForm,
}

#[derive(Debug, Serialize)]
pub struct DestinationsPanel<'a> {
    rows: Vec<DestinationRow>,
    form: FormState<'a>,
    notice: Option<&'a Notice>,
}

pub struct AdminDestinationsView {
    destinations: Vec<Destination>,
    mode: FormMode,
    form: DestinationForm,
    notice: Option<Notice>,
}

impl AdminDestinationsView {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            mode: FormMode::Create,
            form: DestinationForm::default(),
            notice: None,
        }
    }

    /// Returns false (and leaves the form untouched) for an unknown id.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(destination) = self.destinations.iter().find(|d| d.id == id) else {
            return false;
        };
        self.form = DestinationForm::from(destination);
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            message: format!("Editing: {}", destination.name),
        });
        self.mode = FormMode::Edit { id: destination.id.clone() };
        true
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice { level, message: message.into() });
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &DestinationForm {
        &self.form
    }

    pub fn rows(&self) -> Vec<DestinationRow> {
        self.destinations
            .iter()
            .map(|d| DestinationRow {
                id: d.id.clone(),
                name: d.name.clone(),
                location: d.location.clone(),
                price_range: d.price_range.map(|p| p.to_string()).unwrap_or_default(),
                featured: if d.featured { "Yes" } else { "No" },
            })
            .collect()
    }

    pub fn panel(&self) -> DestinationsPanel<'_> {
        DestinationsPanel {
            rows: self.rows(),
            form: FormState {
                method: self.mode.method(),
                action: self.mode.action(),
                submit_label: self.mode.submit_label(),
                editing: matches!(self.mode, FormMode::Edit { .. }),
                fields: &self.form,
            },
            notice: self.notice.as_ref(),
        }
    }
}

/// Dashboard counters. Field names match the panel's element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub pending_comments: i64,
    pub active_packages: i64,
    pub total_posts: i64,
}

#[derive(Debug, Serialize)]
pub struct CommentRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub rating: String,
    pub page: String,
    pub approved: bool,
    pub posted_on: String,
}

impl From<&Comment> for CommentRow {
    fn from(c: &Comment) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            comment: c.comment.clone(),
            rating: c.rating.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            page: c.page.clone().unwrap_or_default(),
            approved: c.approved,
            posted_on: short_date(&c.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingRow {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub package_title: String,
    pub travel_date: String,
    pub travelers: String,
    pub status: String,
    pub total: String,
}

impl From<&BookingView> for BookingRow {
    fn from(b: &BookingView) -> Self {
        Self {
            id: b.id.clone(),
            customer_name: b.customer.name.clone(),
            customer_email: b.customer.email.clone(),
            package_title: b
                .package
                .as_ref()
                .map(|p| p.title.clone())
                .unwrap_or_else(|| "(package removed)".to_string()),
            travel_date: short_date(&b.travel_date),
            travelers: format!("{} adults, {} children", b.travelers.adults, b.travelers.children),
            status: b.status.to_string(),
            total: b.total_amount.map(|t| format!("${}", t)).unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::destination::DestinationDraft;

    fn destination(name: &str, featured: bool) -> Destination {
        DestinationDraft {
            name: Some(name.into()),
            description: Some("desc".into()),
            location: Some("St. Vincent".into()),
            image: Some("/img.jpg".into()),
            price_range: Some(Some("Moderate".into())),
            featured: Some(featured),
            ..Default::default()
        }
        .into_destination()
        .unwrap()
    }

    #[test]
    fn test_edit_mode_swaps_target_and_label() {
        let soufriere = destination("La Soufrière", true);
        let id = soufriere.id.clone();
        let mut view = AdminDestinationsView::new(vec![destination("Mustique", false), soufriere]);

        assert_eq!(view.mode().submit_label(), "Add Destination");
        assert_eq!(view.mode().method(), "POST");

        assert!(view.begin_edit(&id));
        assert_eq!(view.mode(), &FormMode::Edit { id: id.clone() });
        assert_eq!(view.mode().submit_label(), "Update Destination");
        assert_eq!(view.mode().method(), "PUT");
        assert_eq!(view.mode().action(), format!("/api/admin/destinations/{}", id));
        assert_eq!(view.form().name, "La Soufrière");
        assert_eq!(view.form().price_range, "Moderate");
        assert!(view.form().featured);
    }

    #[test]
    fn test_unknown_id_keeps_create_mode() {
        let mut view = AdminDestinationsView::new(vec![destination("Canouan", false)]);
        assert!(!view.begin_edit("missing"));
        assert_eq!(view.mode(), &FormMode::Create);
    }

    #[test]
    fn test_rows_render_featured_flag() {
        let view = AdminDestinationsView::new(vec![destination("Union Island", true), destination("Palm Island", false)]);
        let flags: Vec<&str> = view.rows().iter().map(|r| r.featured).collect();
        assert_eq!(flags, vec!["Yes", "No"]);
    }
}

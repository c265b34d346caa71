//! HTML fragments for the public landing page.
//!
//! A store failure never escapes as an error page here: it is logged and the
//! section renders its "failed to load" placeholder instead.

use axum::{extract::{State, Path}, response::Html};
use crate::state::AppState;
use crate::api::extractors::json::JsonBody;
use crate::api::dtos::requests::ContactRequest;
use crate::api::handlers::{blog, destination, package};
use crate::domain::services::expansion::expand_packages;
use crate::domain::services::schema::Schema;
use crate::error::AppError;
use crate::web::render;
use std::sync::Arc;
use tracing::{error, info};

fn section<T>(
    state: &AppState,
    what: &str,
    loaded: Result<T, AppError>,
    draw: impl FnOnce(&T) -> Result<String, AppError>,
) -> Result<Html<String>, AppError> {
    let html = match loaded {
        Ok(records) => draw(&records)?,
        Err(e) => {
            error!("Failed to load {}: {}", what, e);
            render::load_failed(&state.templates, what)?
        }
    };
    Ok(Html(html))
}

pub async fn featured_destinations(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let loaded = state.destination_repo.list_featured(destination::FEATURED_LIMIT).await;
    section(&state, "destinations", loaded, |d| render::destination_cards(&state.templates, d))
}

pub async fn featured_packages(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let loaded = async {
        let packages = state.package_repo.list_featured(package::FEATURED_LIMIT).await?;
        expand_packages(state.destination_repo.as_ref(), packages).await
    }
    .await;
    section(&state, "packages", loaded, |p| render::package_cards(&state.templates, p))
}

pub async fn featured_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let loaded = state.blog_repo.list_featured(blog::FEATURED_LIMIT).await;
    section(&state, "blog posts", loaded, |b| render::blog_cards(&state.templates, b))
}

pub async fn comments_for_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<Html<String>, AppError> {
    let loaded = state.comment_repo.list_approved_by_page(&page).await;
    section(&state, "comments", loaded, |c| render::comment_list(&state.templates, c))
}

/// Acknowledges the contact form. Messages are not stored or forwarded.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> Result<Html<String>, AppError> {
    let mut schema = Schema::new("Contact");
    let name = schema.required_text("name", payload.name);
    schema.required_text("email", payload.email);
    schema.required_text("message", payload.message);
    schema.finish()?;

    info!("Contact form submitted by {}", name);
    Ok(Html(render::contact_ack(&state.templates, &name)?))
}

use axum::{extract::{State, Query}, response::Html};
use crate::state::AppState;
use crate::api::dtos::requests::DestinationsPanelQuery;
use crate::api::handlers::stats::load_stats;
use crate::domain::services::expansion::expand_bookings;
use crate::error::AppError;
use crate::web::admin::{AdminDestinationsView, NoticeLevel};
use crate::web::render;
use std::sync::Arc;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let stats = load_stats(&state).await?;
    Ok(Html(render::admin_dashboard(&state.templates, &stats)?))
}

/// `?edit=<id>` opens the form on an existing destination.
pub async fn destinations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DestinationsPanelQuery>,
) -> Result<Html<String>, AppError> {
    let mut view = AdminDestinationsView::new(state.destination_repo.list().await?);
    if let Some(id) = query.edit.as_deref()
        && !view.begin_edit(id) {
            view.notify(NoticeLevel::Error, "Destination not found");
        }
    Ok(Html(render::admin_destinations(&state.templates, &view)?))
}

pub async fn comments(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let comments = state.comment_repo.list_all().await?;
    Ok(Html(render::admin_comments(&state.templates, &comments)?))
}

pub async fn bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let bookings = state.booking_repo.list_all().await?;
    let expanded = expand_bookings(state.package_repo.as_ref(), bookings).await?;
    Ok(Html(render::admin_bookings(&state.templates, &expanded)?))
}

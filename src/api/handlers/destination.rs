use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::JsonBody;
use crate::api::dtos::responses::MessageResponse;
use crate::domain::models::destination::DestinationDraft;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// How many featured destinations the landing page shows.
pub const FEATURED_LIMIT: i64 = 6;

pub async fn list_destinations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let destinations = state.destination_repo.list().await?;
    Ok(Json(destinations))
}

pub async fn list_featured_destinations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let destinations = state.destination_repo.list_featured(FEATURED_LIMIT).await?;
    Ok(Json(destinations))
}

pub async fn get_destination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let destination = state.destination_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Destination not found".to_string()))?;
    Ok(Json(destination))
}

pub async fn create_destination(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<DestinationDraft>,
) -> Result<impl IntoResponse, AppError> {
    let destination = draft.into_destination()?;
    let created = state.destination_repo.create(&destination).await?;
    info!("Created destination: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_destination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<DestinationDraft>,
) -> Result<impl IntoResponse, AppError> {
    let Some(current) = state.destination_repo.find_by_id(&id).await? else {
        warn!("Update for unknown destination {}", id);
        return Ok(Json(None));
    };
    let merged = draft.merge_into(current)?;
    let updated = state.destination_repo.update(&merged).await?;
    info!("Updated destination: {}", id);
    Ok(Json(updated))
}

pub async fn delete_destination(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.destination_repo.delete(&id).await? {
        info!("Deleted destination: {}", id);
    }
    Ok(Json(MessageResponse::new("Destination deleted")))
}

use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::JsonBody;
use crate::api::dtos::responses::MessageResponse;
use crate::domain::models::package::PackageDraft;
use crate::domain::services::expansion::{expand_package, expand_packages};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub const FEATURED_LIMIT: i64 = 3;

pub async fn list_packages(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let packages = state.package_repo.list().await?;
    let expanded = expand_packages(state.destination_repo.as_ref(), packages).await?;
    Ok(Json(expanded))
}

pub async fn list_featured_packages(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let packages = state.package_repo.list_featured(FEATURED_LIMIT).await?;
    let expanded = expand_packages(state.destination_repo.as_ref(), packages).await?;
    Ok(Json(expanded))
}

pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let package = state.package_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;
    let expanded = expand_package(state.destination_repo.as_ref(), package).await?;
    Ok(Json(expanded))
}

pub async fn create_package(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<PackageDraft>,
) -> Result<impl IntoResponse, AppError> {
    let package = draft.into_package()?;
    let created = state.package_repo.create(&package).await?;
    info!("Created package: {} with {} destinations", created.title, created.destinations.len());
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<PackageDraft>,
) -> Result<impl IntoResponse, AppError> {
    let Some(current) = state.package_repo.find_by_id(&id).await? else {
        warn!("Update for unknown package {}", id);
        return Ok(Json(None));
    };
    let merged = draft.merge_into(current)?;
    let updated = state.package_repo.update(&merged).await?;
    info!("Updated package: {}", id);
    Ok(Json(updated))
}

pub async fn delete_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.package_repo.delete(&id).await? {
        info!("Deleted package: {}", id);
    }
    Ok(Json(MessageResponse::new("Package deleted")))
}

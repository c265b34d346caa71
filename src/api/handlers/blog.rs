use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::JsonBody;
use crate::api::dtos::responses::MessageResponse;
use crate::domain::models::blog::BlogDraft;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub const FEATURED_LIMIT: i64 = 3;

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let posts = state.blog_repo.list_published().await?;
    Ok(Json(posts))
}

pub async fn list_featured_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let posts = state.blog_repo.list_featured(FEATURED_LIMIT).await?;
    Ok(Json(posts))
}

/// Drafts are invisible here: an unpublished post answers exactly like a
/// missing one.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = state.blog_repo.find_by_id(&id).await?
        .filter(|post| post.published)
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;
    Ok(Json(post))
}

pub async fn list_all_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let posts = state.blog_repo.list_all().await?;
    Ok(Json(posts))
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<BlogDraft>,
) -> Result<impl IntoResponse, AppError> {
    let post = draft.into_blog()?;
    let created = state.blog_repo.create(&post).await?;
    info!("Created blog post: {} (published: {})", created.title, created.published);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<BlogDraft>,
) -> Result<impl IntoResponse, AppError> {
    let Some(current) = state.blog_repo.find_by_id(&id).await? else {
        warn!("Update for unknown blog post {}", id);
        return Ok(Json(None));
    };
    let merged = draft.merge_into(current)?;
    let updated = state.blog_repo.update(&merged).await?;
    info!("Updated blog post: {}", id);
    Ok(Json(updated))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.blog_repo.delete(&id).await? {
        info!("Deleted blog post: {}", id);
    }
    Ok(Json(MessageResponse::new("Blog post deleted")))
}

use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::JsonBody;
use crate::api::dtos::responses::MessageResponse;
use crate::domain::models::comment::CommentDraft;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn list_comments_for_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comments = state.comment_repo.list_approved_by_page(&page).await?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<CommentDraft>,
) -> Result<impl IntoResponse, AppError> {
    let comment = draft.into_comment()?;
    let created = state.comment_repo.create(&comment).await?;
    info!("Comment {} received for page {:?}, awaiting approval", created.id, created.page);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_all_comments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let comments = state.comment_repo.list_all().await?;
    Ok(Json(comments))
}

pub async fn approve_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let approved = state.comment_repo.approve(&id).await?;
    match &approved {
        Some(_) => info!("Approved comment: {}", id),
        None => warn!("Approval for unknown comment {}", id),
    }
    Ok(Json(approved))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.comment_repo.delete(&id).await? {
        info!("Deleted comment: {}", id);
    }
    Ok(Json(MessageResponse::new("Comment deleted")))
}

use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::web::admin::DashboardStats;
use crate::error::AppError;
use std::sync::Arc;

pub async fn load_stats(state: &AppState) -> Result<DashboardStats, AppError> {
    let (total_bookings, pending_comments, active_packages, total_posts) = tokio::try_join!(
        state.booking_repo.count(),
        state.comment_repo.count_pending(),
        state.package_repo.count(),
        state.blog_repo.count(),
    )?;
    Ok(DashboardStats { total_bookings, pending_comments, active_packages, total_posts })
}

pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(load_stats(&state).await?))
}

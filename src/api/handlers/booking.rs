use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::json::JsonBody;
use crate::api::dtos::requests::UpdateBookingStatusRequest;
use crate::domain::models::booking::{BookingDraft, BookingStatus};
use crate::domain::services::expansion::{expand_booking, expand_bookings};
use crate::domain::services::schema::Schema;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<BookingDraft>,
) -> Result<impl IntoResponse, AppError> {
    let booking = draft.into_booking()?;
    let created = state.booking_repo.create(&booking).await?;
    info!(
        "Booking {} created for package {} ({} adults, {} children)",
        created.id, created.package_id, created.travelers.adults, created.travelers.children
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&id).await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
    let expanded = expand_booking(state.package_repo.as_ref(), booking).await?;
    Ok(Json(expanded))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_all().await?;
    let expanded = expand_bookings(state.package_repo.as_ref(), bookings).await?;
    Ok(Json(expanded))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut schema = Schema::new("Booking");
    let raw = schema.required("status", payload.status);
    let status = schema.one_of::<BookingStatus>("status", raw);
    schema.finish()?;
    let status = status.ok_or_else(|| AppError::Validation("Booking validation failed: status".to_string()))?;

    let Some(updated) = state.booking_repo.update_status(&id, status).await? else {
        warn!("Status update for unknown booking {}", id);
        return Ok(Json(None));
    };
    info!("Booking {} is now {}", id, status);
    let expanded = expand_booking(state.package_repo.as_ref(), updated).await?;
    Ok(Json(Some(expanded)))
}

use axum::extract::FromRequest;
use crate::error::AppError;

/// `axum::Json` whose rejections (bad syntax, wrong types, missing
/// content type) come back as 400 `{"message": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

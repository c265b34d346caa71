use axum::{
    extract::{FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{warn, Span};

/// Proof that the request carried an accepted admin credential.
pub struct AdminSession;

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let credential = parts.headers.get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if !state.admin_auth.validate_credential(credential).await? {
            warn!("Rejected admin request: {} {}", parts.method, parts.uri.path());
            return Err(AppError::Unauthorized);
        }

        Span::current().record("admin", true);
        Ok(AdminSession)
    }
}

/// Route layer for everything under the admin prefixes; rejects before the
/// body is read or any handler runs.
pub async fn require_admin(
    _admin: AdminSession,
    request: Request,
    next: Next,
) -> Response {
    next.run(request).await
}

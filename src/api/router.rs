use axum::{
    body::Body,
    extract::Request,
    middleware::from_fn_with_state,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::extractors::admin::require_admin;
use crate::api::handlers::{health, destination, package, blog, comment, booking, stats, site, admin_panel};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

fn public_api() -> Router<Arc<AppState>> {
    Router::new()
        .route("/destinations", get(destination::list_destinations))
        .route("/destinations/featured", get(destination::list_featured_destinations))
        .route("/destinations/{id}", get(destination::get_destination))

        .route("/packages", get(package::list_packages))
        .route("/packages/featured", get(package::list_featured_packages))
        .route("/packages/{id}", get(package::get_package))

        .route("/blog", get(blog::list_posts))
        .route("/blog/featured", get(blog::list_featured_posts))
        .route("/blog/{id}", get(blog::get_post))

        .route("/comments", post(comment::create_comment))
        .route("/comments/{page}", get(comment::list_comments_for_page))

        .route("/bookings", post(booking::create_booking))
        .route("/bookings/{id}", get(booking::get_booking))
}

fn admin_api() -> Router<Arc<AppState>> {
    Router::new()
        .route("/destinations", get(destination::list_destinations).post(destination::create_destination))
        .route("/destinations/{id}", put(destination::update_destination).delete(destination::delete_destination))

        .route("/packages", get(package::list_packages).post(package::create_package))
        .route("/packages/{id}", put(package::update_package).delete(package::delete_package))

        .route("/blog", get(blog::list_all_posts).post(blog::create_post))
        .route("/blog/{id}", put(blog::update_post).delete(blog::delete_post))

        .route("/comments", get(comment::list_all_comments))
        .route("/comments/{id}", delete(comment::delete_comment))
        .route("/comments/{id}/approve", put(comment::approve_comment))

        .route("/bookings", get(booking::list_bookings))
        .route("/bookings/{id}/status", put(booking::update_booking_status))

        .route("/stats", get(stats::dashboard_stats))
}

fn site_fragments() -> Router<Arc<AppState>> {
    Router::new()
        .route("/destinations/featured", get(site::featured_destinations))
        .route("/packages/featured", get(site::featured_packages))
        .route("/blog/featured", get(site::featured_posts))
        .route("/comments/{page}", get(site::comments_for_page))
        .route("/contact", post(site::submit_contact))
}

fn admin_fragments() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(admin_panel::dashboard))
        .route("/destinations", get(admin_panel::destinations))
        .route("/comments", get(admin_panel::comments))
        .route("/bookings", get(admin_panel::bookings))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let admin_gate = from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/admin", admin_api().layer(admin_gate.clone()))
        .nest("/api", public_api())
        .nest("/site", site_fragments())
        .nest("/admin/fragments", admin_fragments().layer(admin_gate))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

fn booking_body(package: &str) -> Value {
    json!({
        "package": package,
        "customer": {"name": "Leon", "email": "leon@example.com", "phone": "+1 784 555 0101"},
        "travelDate": "2025-12-20",
        "totalAmount": 2598.0
    })
}

#[tokio::test]
async fn test_booking_defaults_and_expansion() {
    let app = TestApp::new().await;
    let pkg = app.create_package("Volcano Trek", &[], false).await;

    let (status, created) = app.public("POST", "/api/bookings", Some(booking_body(&pkg))).await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["travelers"], json!({"adults": 1, "children": 0}));
    assert_eq!(created["package"], pkg.as_str());
    assert!(created["travelDate"].as_str().unwrap().starts_with("2025-12-20T00:00:00"));

    let id = created["_id"].as_str().unwrap();
    let (status, body) = app.public("GET", &format!("/api/bookings/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["package"]["title"], "Volcano Trek");
    assert_eq!(body["customer"]["phone"], "+1 784 555 0101");
}

#[tokio::test]
async fn test_booking_requires_travel_date_and_customer() {
    let app = TestApp::new().await;

    let (status, body) = app.public("POST", "/api/bookings", Some(json!({
        "package": "pkg",
        "customer": {"name": "Leon"}
    }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Booking validation failed"));
    assert!(message.contains("travelDate"));
    assert!(message.contains("customer.email"));

    let mut bad_date = booking_body("pkg");
    bad_date["travelDate"] = json!("next tuesday");
    let (status, _) = app.public("POST", "/api/bookings", Some(bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_for_missing_package_expands_to_null() {
    let app = TestApp::new().await;

    let (status, created) = app.public("POST", "/api/bookings", Some(booking_body("no-such-package"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.public("GET", &format!("/api/bookings/{}", created["_id"].as_str().unwrap()), None).await;
    assert!(body["package"].is_null());

    let (status, body) = app.public("GET", "/api/bookings/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Booking not found");
}

#[tokio::test]
async fn test_status_update_flow() {
    let app = TestApp::new().await;
    let pkg = app.create_package("Sailing Week", &[], false).await;
    let (_, created) = app.public("POST", "/api/bookings", Some(booking_body(&pkg))).await;
    let id = created["_id"].as_str().unwrap();
    let uri = format!("/api/admin/bookings/{}/status", id);

    let (status, body) = app.admin("PUT", &uri, Some(json!({"status": "confirmed"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["package"]["title"], "Sailing Week");

    let (status, _) = app.admin("PUT", &uri, Some(json!({"status": "shipped"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = app.admin("PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.admin("PUT", "/api/admin/bookings/unknown/status", Some(json!({"status": "cancelled"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (_, list) = app.admin("GET", "/api/admin/bookings", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["status"], "confirmed");
    assert_eq!(list[0]["package"]["_id"], pkg.as_str());
}

#[tokio::test]
async fn test_public_booking_ignores_requested_status() {
    let app = TestApp::new().await;
    let mut body = booking_body("pkg");
    body["status"] = json!("confirmed");

    let (status, created) = app.public("POST", "/api/bookings", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
}

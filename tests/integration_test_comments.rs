mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

async fn post_comment(app: &TestApp, name: &str, page: &str, rating: Option<i32>) -> (StatusCode, Value) {
    app.public("POST", "/api/comments", Some(json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "comment": "Wonderful stay",
        "rating": rating,
        "page": page
    }))).await
}

#[tokio::test]
async fn test_only_approved_comments_for_page_newest_first() {
    let app = TestApp::new().await;

    let mut ids = Vec::new();
    for (name, page) in [("Ana", "home"), ("Ben", "home"), ("Cleo", "blog"), ("Dev", "home")] {
        let (status, body) = post_comment(&app, name, page, Some(5)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["approved"], false);
        ids.push(body["_id"].as_str().unwrap().to_string());
    }

    let (_, body) = app.public("GET", "/api/comments/home", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    for id in [&ids[0], &ids[2], &ids[3]] {
        let (status, body) = app.admin("PUT", &format!("/api/admin/comments/{}/approve", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["approved"], true);
    }

    let (_, body) = app.public("GET", "/api/comments/home", None).await;
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Dev", "Ana"]);

    let (_, body) = app.public("GET", "/api/comments/blog", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rating_bounds() {
    let app = TestApp::new().await;

    for rating in [0, 6] {
        let (status, body) = post_comment(&app, "Eve", "home", Some(rating)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("rating"));
    }
    for rating in [1, 5] {
        let (status, _) = post_comment(&app, "Eve", "home", Some(rating)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, body) = post_comment(&app, "Eve", "home", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("rating").is_none());
}

#[tokio::test]
async fn test_public_cannot_self_approve() {
    let app = TestApp::new().await;

    let (status, body) = app.public("POST", "/api/comments", Some(json!({
        "name": "Mallory",
        "email": "m@example.com",
        "comment": "Buy my stuff",
        "approved": true,
        "page": "home"
    }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["approved"], false);

    let (_, body) = app.public("GET", "/api/comments/home", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_admin_moderation_listing_and_delete() {
    let app = TestApp::new().await;
    let (_, c) = post_comment(&app, "Fay", "home", None).await;
    let id = c["_id"].as_str().unwrap();

    let (_, all) = app.admin("GET", "/api/admin/comments", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, body) = app.admin("PUT", "/api/admin/comments/unknown/approve", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    for _ in 0..2 {
        let (status, body) = app.admin("DELETE", &format!("/api/admin/comments/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Comment deleted");
    }
    let (_, all) = app.admin("GET", "/api/admin/comments", None).await;
    assert_eq!(all.as_array().unwrap().len(), 0);
}

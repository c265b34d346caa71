use travel_site::{
    api::router::create_router,
    config::Config,
    infra::factory::{run_sqlite_migrations, state_from_pool},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_SECRET: &str = "test-admin-secret";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = Config {
            database_url: db_url,
            port: 0,
            admin_secret: ADMIN_SECRET.to_string(),
        };

        let state = Arc::new(state_from_pool(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>, credential: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(credential) = credential {
            builder = builder.header(header::AUTHORIZATION, credential);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    /// Anonymous JSON call.
    pub async fn public(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.send(method, uri, body, None).await;
        (response.status(), parse_body(response).await)
    }

    /// JSON call carrying the admin secret.
    pub async fn admin(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.send(method, uri, body, Some(ADMIN_SECRET)).await;
        (response.status(), parse_body(response).await)
    }

    pub async fn html(&self, method: &str, uri: &str, body: Option<Value>, credential: Option<&str>) -> (StatusCode, String) {
        let response = self.send(method, uri, body, credential).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn create_destination(&self, name: &str, featured: bool) -> String {
        let (status, body) = self.admin("POST", "/api/admin/destinations", Some(serde_json::json!({
            "name": name,
            "description": format!("{} is worth the trip", name),
            "location": "St. Vincent and the Grenadines",
            "image": "/images/dest.jpg",
            "priceRange": "Moderate",
            "featured": featured
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "destination create failed: {}", body);
        body["_id"].as_str().unwrap().to_string()
    }

    pub async fn create_package(&self, title: &str, destinations: &[&str], featured: bool) -> String {
        let (status, body) = self.admin("POST", "/api/admin/packages", Some(serde_json::json!({
            "title": title,
            "description": "Island hopping with local guides",
            "destinations": destinations,
            "duration": {"days": 5, "nights": 4},
            "price": 1299.0,
            "featured": featured
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "package create failed: {}", body);
        body["_id"].as_str().unwrap().to_string()
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

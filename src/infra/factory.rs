use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::auth::shared_secret::SharedSecretAuthenticator;
use crate::infra::repositories::{
    sqlite_destination_repo::SqliteDestinationRepo, sqlite_package_repo::SqlitePackageRepo,
    sqlite_blog_repo::SqliteBlogRepo, sqlite_comment_repo::SqliteCommentRepo,
    sqlite_booking_repo::SqliteBookingRepo,
};
use crate::web::render::load_templates;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    state_from_pool(config, pool)
}

pub fn state_from_pool(config: &Config, pool: SqlitePool) -> AppState {
    let templates = Arc::new(load_templates().expect("Failed to load page templates"));

    AppState {
        config: config.clone(),
        destination_repo: Arc::new(SqliteDestinationRepo::new(pool.clone())),
        package_repo: Arc::new(SqlitePackageRepo::new(pool.clone())),
        blog_repo: Arc::new(SqliteBlogRepo::new(pool.clone())),
        comment_repo: Arc::new(SqliteCommentRepo::new(pool.clone())),
        booking_repo: Arc::new(SqliteBookingRepo::new(pool)),
        admin_auth: Arc::new(SharedSecretAuthenticator::new(config.admin_secret.clone())),
        templates,
    }
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

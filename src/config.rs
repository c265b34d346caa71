use std::env;

pub const DEFAULT_ADMIN_SECRET: &str = "admin-secret-key";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_secret: String, // Shared value expected in the Authorization header
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://travel-site.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "5000".to_string()).parse().expect("PORT must be a number"),
            admin_secret: env::var("ADMIN_SECRET").unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string()),
        }
    }
}

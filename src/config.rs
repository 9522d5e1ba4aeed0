//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DB_HOST` (optional): PostgreSQL host, defaults to `localhost`
/// - `DB_PORT` (optional): PostgreSQL port, defaults to 5432
/// - `DB_USER` (required): PostgreSQL user
/// - `DB_PASSWORD` (required): PostgreSQL password
/// - `DB_NAME` (required): database name
/// - `PORT` (optional): HTTP server port, defaults to 8083
/// - `NOTIFICATION_SERVICE_URL` (optional): base URL of the notification
///   service, defaults to `http://notification-service:8084`
/// - `SERVICE_API_KEY` (optional): shared key forwarded on notification
///   calls, defaults to `banking-shared-key`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    pub db_user: String,

    pub db_password: String,

    pub db_name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_notification_service_url")]
    pub notification_service_url: String,

    #[serde(default = "default_service_api_key")]
    pub service_api_key: String,
}

/// Default database host if DB_HOST is not set.
fn default_db_host() -> String {
    "localhost".to_string()
}

/// Default database port if DB_PORT is not set.
fn default_db_port() -> u16 {
    5432
}

/// Default port if the PORT environment variable is not set.
fn default_port() -> u16 {
    8083
}

/// Default notification service base URL if NOTIFICATION_SERVICE_URL is not set.
fn default_notification_service_url() -> String {
    "http://notification-service:8084".to_string()
}

/// Default shared key if SERVICE_API_KEY is not set.
fn default_service_api_key() -> String {
    "banking-shared-key".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DB_USER)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: db_host -> DB_HOST
        envy::from_env::<Config>()
    }
}

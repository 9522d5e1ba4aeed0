//! Transaction Service - Main Application Entry Point
//!
//! A record-keeping REST API for financial transactions. It persists
//! transaction records to PostgreSQL, fires a best-effort notification to a
//! downstream notification service on every create, and exposes read and
//! delete endpoints.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Outbound**: reqwest client for the notification service
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Build the notification client
//! 4. Build HTTP router over the shared application state
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;
mod state;
mod store;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{
    services::notification::NotificationClient,
    state::AppState,
    store::{PgTransactionStore, TransactionStore},
};

/// Build the service router over `state`.
///
/// Kept separate from `main` so handler tests can drive the exact same
/// routes over an in-memory store.
pub fn app<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        // Liveness and connectivity probes
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/db-check", get(handlers::health::db_check::<T>))
        // Transaction records
        .route(
            "/transactions",
            post(handlers::transactions::create_transaction::<T>),
        )
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions::<T>),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction::<T>),
        )
        .route(
            "/transactions/{id}",
            delete(handlers::transactions::delete_transaction::<T>),
        )
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the store and notifier with all handlers via State extraction
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config).await?;
    tracing::info!("Database pool created");

    // Assemble the shared state: injected store + notification client
    let notifier =
        NotificationClient::new(&config.notification_service_url, &config.service_api_key)?;
    let state = AppState::new(PgTransactionStore::new(pool), notifier);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app(state)).await?;

    Ok(())
}

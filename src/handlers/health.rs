//! Liveness and connectivity probe endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{state::AppState, store::TransactionStore};

/// Response body for the orchestration probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Service name, for probes that watch several services
    pub service: String,
}

/// Plain-text liveness check.
///
/// # Endpoint
///
/// `GET /`
pub async fn root() -> &'static str {
    "Transaction Service running"
}

/// Orchestration probe.
///
/// Always reports UP: this checks the process, not the database. Use
/// `/db-check` for store connectivity.
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "UP", "service": "transaction-service" }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: "transaction-service".to_string(),
    })
}

/// Database liveness probe.
///
/// Runs a trivial round-trip query and reports the store's current time.
/// Both outcomes are plain text, not JSON.
///
/// # Responses
///
/// - 200: `DB connection OK. Server time now: <timestamp>`
/// - 500: `DB connection failed: <error>`
pub async fn db_check<T>(State(state): State<AppState<T>>) -> (StatusCode, String)
where
    T: TransactionStore + Clone + Send + Sync,
{
    match state.store.check_connectivity().await {
        Ok(now) => (
            StatusCode::OK,
            format!("DB connection OK. Server time now: {now}"),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("DB connection failed: {err}"),
        ),
    }
}

//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Resource Errors**: Requested transaction not found
///
/// Notification delivery failures are deliberately not represented here;
/// they are absorbed at the call site and never surface to the client. See
/// [`NotificationError`](crate::services::notification::NotificationError).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, constraint
    /// violation, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`. The
    /// underlying message is passed through unchanged so clients see the
    /// same diagnostics the database produced.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Requested transaction does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    TransactionNotFound,
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// Storage errors return the underlying message verbatim:
/// ```json
/// { "error": "error returned from database: ..." }
/// ```
///
/// Missing transactions return a fixed human message:
/// ```json
/// { "message": "Transaction not found" }
/// ```
///
/// # Status Code Mapping
///
/// - `Database` → 500 Internal Server Error
/// - `TransactionNotFound` → 404 Not Found
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, JSON body)
        let (status, body) = match &self {
            AppError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            ),
            AppError::TransactionNotFound => {
                (StatusCode::NOT_FOUND, json!({ "message": self.to_string() }))
            }
        };

        // Return the response with status code and JSON body
        (status, Json(body)).into_response()
    }
}

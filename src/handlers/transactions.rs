//! Transaction record endpoints.
//!
//! This module implements the CRUD surface:
//! - POST /transactions - Record a transaction and trigger a notification
//! - GET /transactions - List all records, most recent first
//! - GET /transactions/:id - Fetch one record
//! - DELETE /transactions/:id - Delete one record

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, CreateTransactionResponse, Transaction},
    state::AppState,
    store::TransactionStore,
};

/// Record a transaction (deposit, withdraw, or transfer).
///
/// # Workflow
///
/// 1. Insert the record; the insert must succeed for the request to succeed.
/// 2. Notify the notification service. Delivery is advisory: the result is
///    logged and discarded, and a failure never changes the response's
///    status code or body.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": 1,
///   "amount": 500,
///   "txn_type": "deposit",
///   "counterparty": null,
///   "reference": "salary"
/// }
/// ```
///
/// # Response (201 Created)
///
/// The persisted record, including its generated `txn_id`, wrapped in a
/// confirmation message.
///
/// # Validation
///
/// None beyond deserialization; the table's column constraints are the only
/// enforcement. A `withdraw` gets an advisory log entry and proceeds without
/// any balance check (demo-only behavior, deliberately a no-op).
pub async fn create_transaction<T>(
    State(state): State<AppState<T>>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), AppError>
where
    T: TransactionStore + Clone + Send + Sync,
{
    if request.txn_type.as_deref() == Some("withdraw") {
        tracing::warn!("Withdraw transaction received - skipping balance validation for demo");
    }

    let transaction = state.store.create(request).await?;

    // Advisory call: log the outcome, discard the result.
    match state.notifier.notify(&transaction).await {
        Ok(()) => tracing::info!("Notification sent for txn {}", transaction.txn_id),
        Err(err) => tracing::error!("Failed to send notification: {err}"),
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateTransactionResponse {
            message: "Transaction recorded successfully & notification triggered".to_string(),
            transaction,
        }),
    ))
}

/// List all transaction records, ordered by `txn_id` descending.
///
/// Returns an empty array when no records exist.
pub async fn list_transactions<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Transaction>>, AppError>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.store.list_all().await?;

    Ok(Json(transactions))
}

/// Fetch a transaction record by id.
///
/// Returns 404 with `{"message": "Transaction not found"}` when the id does
/// not exist.
pub async fn get_transaction<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, AppError>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transaction = state
        .store
        .get_by_id(id)
        .await?
        .ok_or(AppError::TransactionNotFound)?;

    Ok(Json(transaction))
}

/// Delete a transaction record by id.
///
/// Returns 404 when the id does not exist; the store is left untouched in
/// that case.
pub async fn delete_transaction<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError>
where
    T: TransactionStore + Clone + Send + Sync,
{
    state
        .store
        .delete_by_id(id)
        .await?
        .ok_or(AppError::TransactionNotFound)?;

    Ok(Json(json!({ "message": "Transaction deleted successfully" })))
}

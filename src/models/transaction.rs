//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a recorded transaction
//! - `CreateTransactionRequest`: Request body for recording a transaction
//! - `CreateTransactionResponse`: Response body returned after a successful create

use serde::{Deserialize, Serialize};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each record:
/// - Has a store-assigned `txn_id` (BIGSERIAL), unique and monotonic
/// - Is never mutated after insert; it is only read or deleted
///
/// # JSON Example
///
/// ```json
/// {
///   "txn_id": 42,
///   "account_id": 1,
///   "amount": 500.0,
///   "txn_type": "deposit",
///   "counterparty": null,
///   "reference": "salary"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier assigned by the database on insert
    pub txn_id: i64,

    /// Account the transaction affects
    ///
    /// Opaque to this service; there is no referential check against an
    /// accounts store.
    pub account_id: i64,

    /// Monetary value
    ///
    /// Sign and units are not enforced by this service.
    pub amount: f64,

    /// Kind of transaction (deposit, withdraw, transfer, ...)
    ///
    /// Stored as free text; the set is open and not validated.
    pub txn_type: String,

    /// Optional identifier of the other party
    pub counterparty: Option<String>,

    /// Optional free-text note
    pub reference: Option<String>,
}

/// Request body for recording a new transaction.
///
/// # JSON Example
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
/// # Validation
///
/// Every field is optional at the HTTP layer and passed through to the
/// database as-is. The NOT NULL column constraints are the only enforcement,
/// so a missing required field surfaces as a storage error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionRequest {
    /// Account the transaction affects
    pub account_id: Option<i64>,

    /// Monetary value
    pub amount: Option<f64>,

    /// Kind of transaction (deposit, withdraw, transfer, ...)
    pub txn_type: Option<String>,

    /// Optional identifier of the other party
    pub counterparty: Option<String>,

    /// Optional free-text note
    pub reference: Option<String>,
}

/// Response body returned after a transaction is recorded.
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Transaction recorded successfully & notification triggered",
///   "transaction": {
///     "txn_id": 42,
///     "account_id": 1,
///     "amount": 500.0,
///     "txn_type": "deposit",
///     "counterparty": null,
///     "reference": "salary"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    /// Human-readable confirmation
    pub message: String,

    /// The persisted record, including the generated `txn_id`
    pub transaction: Transaction,
}

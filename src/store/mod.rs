//! Persistence gateway for transaction records.
//!
//! The [`TransactionStore`] trait is the seam between the HTTP layer and the
//! database: handlers are written against the trait, the binary injects the
//! PostgreSQL implementation at startup, and handler tests inject an
//! in-memory stand-in. Every operation is a single atomic statement; no
//! operation spans a database transaction.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction},
};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgTransactionStore;

/// Handles the creation, retrieval and deletion of transaction records.
///
/// All methods return `Send` futures so implementations can be awaited from
/// concurrently running request handlers.
pub trait TransactionStore {
    /// Insert a new record and return the stored row, including the
    /// generated `txn_id`.
    fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> impl Future<Output = Result<Transaction, AppError>> + Send;

    /// Retrieve every record, most recent (highest `txn_id`) first.
    ///
    /// An empty store yields an empty vector, never an error.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Transaction>, AppError>> + Send;

    /// Retrieve a record by id, or `None` if no row matches.
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Transaction>, AppError>> + Send;

    /// Delete a record by id and return its prior content, or `None` if no
    /// row matched.
    fn delete_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Transaction>, AppError>> + Send;

    /// Run a trivial round-trip query and return the store's current time.
    ///
    /// Used as a liveness probe for the database connection.
    fn check_connectivity(&self) -> impl Future<Output = Result<DateTime<Utc>, AppError>> + Send;
}

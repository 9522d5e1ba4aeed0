//! In-memory store doubles for handler tests.
//!
//! [`MemoryTransactionStore`] mirrors the behavior of the real table: ids
//! are assigned from a counter the way BIGSERIAL assigns them, and inserts
//! with missing required fields fail the way a NOT NULL constraint fails.
//! [`FailingTransactionStore`] errors on every call, standing in for a
//! database that is unreachable.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction},
    store::TransactionStore,
};

/// Thread-safe in-memory stand-in for [`PgTransactionStore`](crate::store::PgTransactionStore).
///
/// Clones share the same underlying rows, matching how pool clones share
/// the same database.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Transaction>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    async fn create(&self, request: CreateTransactionRequest) -> Result<Transaction, AppError> {
        let account_id = request
            .account_id
            .ok_or_else(|| not_null_violation("account_id"))?;
        let amount = request.amount.ok_or_else(|| not_null_violation("amount"))?;
        let txn_type = request
            .txn_type
            .ok_or_else(|| not_null_violation("txn_type"))?;

        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let transaction = Transaction {
            txn_id: inner.next_id,
            account_id,
            amount,
            txn_type,
            counterparty: request.counterparty,
            reference: request.reference,
        };
        inner.rows.push(transaction.clone());

        Ok(transaction)
    }

    async fn list_all(&self) -> Result<Vec<Transaction>, AppError> {
        let mut rows = self.inner.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| b.txn_id.cmp(&a.txn_id));

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let inner = self.inner.lock().unwrap();

        Ok(inner.rows.iter().find(|row| row.txn_id == id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let mut inner = self.inner.lock().unwrap();

        match inner.rows.iter().position(|row| row.txn_id == id) {
            Some(index) => Ok(Some(inner.rows.remove(index))),
            None => Ok(None),
        }
    }

    async fn check_connectivity(&self) -> Result<DateTime<Utc>, AppError> {
        Ok(Utc::now())
    }
}

/// Store double whose every operation reports the database as unreachable.
#[derive(Debug, Clone, Default)]
pub struct FailingTransactionStore;

impl TransactionStore for FailingTransactionStore {
    async fn create(&self, _request: CreateTransactionRequest) -> Result<Transaction, AppError> {
        Err(storage_offline())
    }

    async fn list_all(&self) -> Result<Vec<Transaction>, AppError> {
        Err(storage_offline())
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<Transaction>, AppError> {
        Err(storage_offline())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<Option<Transaction>, AppError> {
        Err(storage_offline())
    }

    async fn check_connectivity(&self) -> Result<DateTime<Utc>, AppError> {
        Err(storage_offline())
    }
}

/// The error a NOT NULL column raises when a required field is absent.
fn not_null_violation(column: &str) -> AppError {
    AppError::Database(sqlx::Error::Protocol(format!(
        "null value in column \"{column}\" of relation \"transactions\" violates not-null constraint"
    )))
}

fn storage_offline() -> AppError {
    AppError::Database(sqlx::Error::PoolClosed)
}

//! PostgreSQL-backed transaction store.
//!
//! Each method executes exactly one parameterized statement against the
//! pool. Inserts and deletes use `RETURNING *` so the affected row comes
//! back in the same round trip, which keeps every operation atomic without
//! explicit database transactions.

use chrono::{DateTime, Utc};

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction},
    store::TransactionStore,
};

/// Stores transaction records in PostgreSQL.
///
/// Cloning is cheap: the wrapped pool is reference-counted, so one instance
/// built at startup is shared by every request handler.
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: DbPool,
}

impl PgTransactionStore {
    /// Create a new store over an existing connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TransactionStore for PgTransactionStore {
    /// Insert the five caller-supplied fields and return the full stored row.
    ///
    /// Missing request fields are bound as NULL; the table's NOT NULL
    /// constraints decide whether the insert is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on constraint violations or
    /// connectivity loss. No partial insert is possible.
    async fn create(&self, request: CreateTransactionRequest) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (account_id, amount, txn_type, counterparty, reference)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.account_id)
        .bind(request.amount)
        .bind(request.txn_type)
        .bind(request.counterparty)
        .bind(request.reference)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Fetch all records ordered by `txn_id` descending.
    async fn list_all(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions ORDER BY txn_id DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(transactions)
    }

    /// Fetch a single record, or `None` when the id does not exist.
    async fn get_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let transaction =
            sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE txn_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(transaction)
    }

    /// Delete a record and return its prior content in one statement.
    async fn delete_by_id(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            "DELETE FROM transactions WHERE txn_id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Round-trip to the database and report its current time.
    async fn check_connectivity(&self) -> Result<DateTime<Utc>, AppError> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }
}

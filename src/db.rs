//! Database connection pool management.
//!
//! This module creates the PostgreSQL connection pool shared by all request
//! handlers. The pool is the only shared mutable resource in the service;
//! each store operation checks out one connection for the duration of a
//! single statement.
//!
//! Schema management is out of scope: the service assumes the
//! `transactions` table already exists (see `schema.sql`).

use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::config::Config;

/// Type alias for PostgreSQL connection pool.
///
/// Instead of writing `Pool<Postgres>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool from the configured connection
/// parts.
///
/// A connection pool maintains multiple database connections that can be reused across HTTP requests which is much more efficient than opening a new connection for each request.
///
/// # Configuration
///
/// - Maximum connections: 5
/// - The initial connection is established eagerly, so a misconfigured
///   database fails startup instead of the first request
///
/// # Errors
///
/// Returns an error if:
/// - Cannot connect to the PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(config: &Config) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);

    PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .connect_with(options)
        .await
}

//! Shared application state injected into every request handler.

use crate::{services::notification::NotificationClient, store::TransactionStore};

/// The state shared by all request handlers.
///
/// Built once at startup and cloned into each handler by axum. It is generic
/// over the store so handler tests can substitute an in-memory implementation
/// for PostgreSQL.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Clone + Send + Sync,
{
    /// Persistence gateway for transaction records
    pub store: T,

    /// Client for the downstream notification service
    pub notifier: NotificationClient,
}

impl<T> AppState<T>
where
    T: TransactionStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(store: T, notifier: NotificationClient) -> Self {
        Self { store, notifier }
    }
}

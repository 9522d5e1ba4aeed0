//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Invokes the injected transaction store (and, on create, the notifier)
//! 3. Returns HTTP response (JSON, status code)

/// Liveness and connectivity probes
pub mod health;

/// Transaction record endpoints
pub mod transactions;

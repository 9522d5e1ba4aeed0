//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Transaction record model and its request/response types
pub mod transaction;

//! Clients for downstream collaborator services.

/// Best-effort notification delivery
pub mod notification;

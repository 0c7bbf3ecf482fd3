//! HTTP request handlers.

/// Catalog listing and engagement endpoints.
pub mod artwork;
/// Health endpoint.
pub mod health;
/// Simulated-ingestion endpoint.
pub mod sync;

//! Core domain library for PaintView (catalog stores, ranking, query engine).

/// Catalog stores: artworks and engagement counters.
pub mod catalog;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across PaintView crates.
pub mod constants;
/// Application error types (store/domain).
pub mod error;
/// Data models for API requests and responses.
pub mod models;
/// Filter, sort, and pagination pipeline.
pub mod query;
/// Trending score and ranked preview lists.
pub mod ranking;
/// Seed data and simulated-ingestion generator.
pub mod seed;

pub use catalog::Catalog;
pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use error::AppError;

//! Shared constants used across PaintView crates.

/// Default API port for PaintView.
pub const DEFAULT_PORT: u16 = 3000;

/// Default page size when a query does not specify `perPage`.
pub const DEFAULT_PER_PAGE: usize = 24;

/// Smallest page size a query can request.
pub const MIN_PER_PAGE: usize = 1;

/// Largest page size served regardless of what the client requests.
pub const MAX_PER_PAGE: usize = 200;

/// Number of entries in each ranked preview list (trending/popular).
pub const SUMMARY_LIST_LEN: usize = 5;

/// Number of synthetic artworks produced by one simulated-ingestion run.
pub const SYNC_BATCH_SIZE: usize = 50;

/// Weight applied to effective views in the trending score.
pub const TRENDING_VIEW_WEIGHT: f64 = 0.6;

/// Weight applied to effective likes in the trending score.
pub const TRENDING_LIKE_WEIGHT: f64 = 2.0;

/// Hours added to the age before decay, keeping the divisor away from zero.
pub const TRENDING_AGE_OFFSET_HOURS: f64 = 2.0;

/// Exponent applied to the offset age; decay is slightly super-linear.
pub const TRENDING_DECAY_EXPONENT: f64 = 1.2;

/// Floor applied to the age in hours before scoring.
pub const TRENDING_MIN_AGE_HOURS: f64 = 1.0;

//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_PER_PAGE, DEFAULT_PORT, MAX_PER_PAGE};
use serde::Deserialize;
use std::env;

/// Runtime configuration for PaintView.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub default_per_page: usize,
    pub max_per_page: usize,
    pub seed_catalog: bool,
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag_or(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Environment variables
    /// - `PORT`: Server port (default: 3000).
    /// - `DEFAULT_PER_PAGE`: Page size when a query omits `perPage`.
    /// - `MAX_PER_PAGE`: Upper clamp for requested page sizes.
    /// - `SEED_CATALOG`: Whether to seed the demo catalog on startup.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            default_per_page: env::var("DEFAULT_PER_PAGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PER_PAGE),
            max_per_page: env::var("MAX_PER_PAGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_PER_PAGE),
            seed_catalog: env_flag_or("SEED_CATALOG", true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
            seed_catalog: true,
        }
    }
}

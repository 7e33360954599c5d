//! Origins allowed by the API's CORS layer.
//!
//! - `ALLOWED_ORIGINS`: comma-separated origin list
//!   (default: `http://localhost:3000,http://localhost:5173`)

use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_ORIGINS),
        }
    }
}

impl CorsConfig {
    #[must_use]
    pub fn from_env() -> Self {
        env::var("ALLOWED_ORIGINS")
            .map(|raw| Self {
                allowed_origins: parse_origins(&raw),
            })
            .unwrap_or_default()
    }
}

/// Splits a comma-separated origin list, dropping blank entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

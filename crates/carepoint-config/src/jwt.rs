//! Signing settings for access tokens.
//!
//! - `JWT_SECRET`: HMAC secret (default: a development placeholder)
//! - `JWT_ACCESS_EXPIRY`: token lifetime in seconds (default: `3600`);
//!   unparsable or non-positive values fall back to the default

use std::env;

pub const DEVELOPMENT_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_ACCESS_EXPIRY: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Seconds until an issued access token expires.
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEVELOPMENT_SECRET.to_string(),
            access_token_expiry: DEFAULT_ACCESS_EXPIRY,
        }
    }
}

impl JwtConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|raw| parse_expiry(&raw))
                .unwrap_or(defaults.access_token_expiry),
        }
    }

    /// `true` while tokens are signed with the placeholder secret.
    pub fn uses_development_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

fn parse_expiry(raw: &str) -> Option<i64> {
    raw.trim().parse().ok().filter(|seconds| *seconds > 0)
}

//! Session persistence configuration.

use std::env;
use std::path::PathBuf;

/// # Environment Variables
///
/// - `SESSION_FILE`: JSON file holding the persisted session (default: `storage/session.json`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| Self::default().file),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("storage/session.json"),
        }
    }
}

//! # Carepoint Auth
//!
//! JWT claims and token utilities.
//!
//! - [`claims`]: Access token claims and their normalization into a [`Principal`]
//! - [`jwt`]: Token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use carepoint_auth::{create_access_token, verify_token};
//! use carepoint_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&principal, &config)?;
//! let claims = verify_token(&token, &config)?;
//! let principal = claims.principal();
//! ```
//!
//! [`Principal`]: carepoint_models::Principal

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};

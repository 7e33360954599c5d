//! # Carepoint Core
//!
//! Core types shared by every Carepoint crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`serde`]: Lenient deserializers for inconsistently-typed backend fields
//!
//! # Example
//!
//! ```ignore
//! use carepoint_core::AppError;
//!
//! let error = AppError::forbidden("Center manager privileges required".to_string());
//! ```

pub mod errors;
pub mod serde;

pub use errors::AppError;

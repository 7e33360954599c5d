//! Authentication and role guards.
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) bearer-token extractor
//! - [`role`]: rank-based guards as middleware functions and helpers for
//!   checks inside handlers
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::{check_center_access, check_minimum_rank};
//!
//! async fn center_report(
//!     auth_user: AuthUser,
//!     Path(center_id): Path<i64>,
//! ) -> Result<Json<Report>, AppError> {
//!     let principal = auth_user.principal();
//!     check_minimum_rank(&principal, UserType::CenterManager)?;
//!     check_center_access(&principal, Some(CenterId::new(center_id)))?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;

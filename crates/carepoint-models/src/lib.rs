//! # Carepoint Models
//!
//! Domain models for the Carepoint access-control service.
//!
//! - [`ids`]: Integer id newtypes (`UserId`, `CenterId`)
//! - [`roles`]: The ranked [`UserType`] enumeration
//! - [`users`]: [`Principal`], [`Center`], and ingress normalization via [`UserRecord`]
//! - [`permissions`]: Derived [`PermissionSet`] and [`CenterScope`]
//!
//! # Example
//!
//! ```ignore
//! use carepoint_models::{UserRecord, UserType};
//!
//! let record: UserRecord = serde_json::from_str(r#"{"user_type":"staff","centerId":5}"#)?;
//! let principal = record.into_principal();
//! assert_eq!(principal.user_type, Some(UserType::Staff));
//! ```

pub mod ids;
pub mod permissions;
pub mod roles;
pub mod users;

pub use ids::{CenterId, UserId};
pub use permissions::{CenterScope, PermissionSet};
pub use roles::{UnknownUserType, UserType};
pub use users::{Center, Principal, UserRecord};

//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend identifies users and centers by 64-bit integers. Wrapping them
//! prevents passing a `CenterId` where a `UserId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use carepoint_models::ids::{CenterId, UserId};
//!
//! fn load_center(id: CenterId) { /* ... */ }
//!
//! load_center(CenterId::new(12));   // OK
//! // load_center(UserId::new(12));  // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = i64)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a user (principal).
    UserId
);

define_id!(
    /// Identifier of a counseling center.
    CenterId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_debug() {
        let id = CenterId::new(12);
        assert_eq!(id.to_string(), "12");
        assert_eq!(format!("{:?}", id), "CenterId(12)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" 5 ".parse::<UserId>().unwrap(), UserId::new(5));
        assert!("five".parse::<UserId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&CenterId::new(7)).unwrap(), "7");
        let id: CenterId = serde_json::from_str("9").unwrap();
        assert_eq!(id.get(), 9);
    }
}

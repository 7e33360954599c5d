//! The six-tier user role hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Role of a principal, ranked from least to most privileged.
///
/// The declaration order is the rank order, so the derived `Ord` agrees with
/// [`UserType::rank`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    General = 0,
    Expert = 1,
    Staff = 2,
    CenterManager = 3,
    RegionalManager = 4,
    SuperAdmin = 5,
}

impl UserType {
    /// All roles in ascending rank order.
    pub const ALL: [UserType; 6] = [
        UserType::General,
        UserType::Expert,
        UserType::Staff,
        UserType::CenterManager,
        UserType::RegionalManager,
        UserType::SuperAdmin,
    ];

    /// Fixed ordinal of the role (`general` = 0 … `super_admin` = 5).
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            UserType::General => "general",
            UserType::Expert => "expert",
            UserType::Staff => "staff",
            UserType::CenterManager => "center_manager",
            UserType::RegionalManager => "regional_manager",
            UserType::SuperAdmin => "super_admin",
        }
    }

    /// Parses a role name, mapping anything unrecognised to `None`.
    ///
    /// This is the fail-closed entry point: an unknown role is treated as an
    /// absent role by every evaluator function.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "general" => Ok(UserType::General),
            "expert" => Ok(UserType::Expert),
            "staff" => Ok(UserType::Staff),
            "center_manager" => Ok(UserType::CenterManager),
            "regional_manager" => Ok(UserType::RegionalManager),
            "super_admin" => Ok(UserType::SuperAdmin),
            _ => Err(UnknownUserType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_fixed() {
        let ranks: Vec<u8> = UserType::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ord_agrees_with_rank() {
        for a in UserType::ALL {
            for b in UserType::ALL {
                assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
            }
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for role in UserType::ALL {
            assert_eq!(role.as_str().parse::<UserType>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_accepts_case_and_dashes() {
        assert_eq!(
            "Center-Manager".parse::<UserType>().unwrap(),
            UserType::CenterManager
        );
    }

    #[test]
    fn test_parse_lenient_unknown_is_none() {
        assert_eq!(UserType::parse_lenient("owner"), None);
        assert_eq!(UserType::parse_lenient(""), None);
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserType::RegionalManager).unwrap(),
            r#""regional_manager""#
        );
        let role: UserType = serde_json::from_str(r#""super_admin""#).unwrap();
        assert_eq!(role, UserType::SuperAdmin);
    }
}

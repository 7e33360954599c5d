//! Menu path classification.
//!
//! Dashboard paths are classified by fixed prefix lists into three tiers.
//! Tiers are checked in the order admin, center-manager, super-admin-only and
//! every tier the path belongs to must pass; the first failing tier denies.
//! Paths that belong to no tier are allowed.

use carepoint_models::UserType;
use serde::Serialize;
use utoipa::ToSchema;

use crate::authority::{is_admin_role, meets_minimum_rank};

pub const ADMIN_PATH_PREFIXES: &[&str] =
    &["/admin", "/schedules", "/statistics", "/counseling-records"];

pub const CENTER_MANAGER_PATH_PREFIXES: &[&str] = &[
    "/admin/users",
    "/admin/experts",
    "/admin/centers",
    "/admin/schedules",
    "/admin/vacations",
];

pub const SUPER_ADMIN_PATH_PREFIXES: &[&str] = &[
    "/admin/system",
    "/admin/centers/create",
    "/admin/regions",
    "/admin/revenue",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MenuTier {
    Admin,
    CenterManager,
    SuperAdminOnly,
}

impl MenuTier {
    /// Tiers in evaluation order.
    pub const ORDER: [MenuTier; 3] = [
        MenuTier::Admin,
        MenuTier::CenterManager,
        MenuTier::SuperAdminOnly,
    ];

    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            MenuTier::Admin => ADMIN_PATH_PREFIXES,
            MenuTier::CenterManager => CENTER_MANAGER_PATH_PREFIXES,
            MenuTier::SuperAdminOnly => SUPER_ADMIN_PATH_PREFIXES,
        }
    }

    pub fn matches(self, path: &str) -> bool {
        self.prefixes().iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn permits(self, role: Option<UserType>) -> bool {
        match self {
            MenuTier::Admin => is_admin_role(role),
            MenuTier::CenterManager => meets_minimum_rank(role, UserType::CenterManager),
            MenuTier::SuperAdminOnly => role == Some(UserType::SuperAdmin),
        }
    }
}

/// Tiers `path` belongs to, in evaluation order.
pub fn menu_tiers(path: &str) -> Vec<MenuTier> {
    MenuTier::ORDER
        .into_iter()
        .filter(|tier| tier.matches(path))
        .collect()
}

/// The first tier that `path` belongs to and `role` fails, if any.
pub fn denying_tier(role: Option<UserType>, path: &str) -> Option<MenuTier> {
    MenuTier::ORDER
        .into_iter()
        .find(|tier| tier.matches(path) && !tier.permits(role))
}

pub fn can_access_menu_path(role: Option<UserType>, path: &str) -> bool {
    denying_tier(role, path).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_path_is_open() {
        assert!(can_access_menu_path(Some(UserType::General), "/some/unlisted/path"));
        assert!(can_access_menu_path(None, "/some/unlisted/path"));
        assert!(menu_tiers("/").is_empty());
    }

    #[test]
    fn test_staff_denied_system_settings() {
        let role = Some(UserType::Staff);
        assert!(MenuTier::Admin.permits(role));
        assert!(!can_access_menu_path(role, "/admin/system/settings"));
        assert_eq!(
            denying_tier(role, "/admin/system/settings"),
            Some(MenuTier::SuperAdminOnly)
        );
    }

    #[test]
    fn test_center_manager_centers_vs_create() {
        let role = Some(UserType::CenterManager);
        assert!(can_access_menu_path(role, "/admin/centers"));
        assert!(!can_access_menu_path(role, "/admin/centers/create"));
    }

    #[test]
    fn test_first_failing_tier_reported() {
        assert_eq!(
            denying_tier(Some(UserType::Expert), "/admin/centers/create"),
            Some(MenuTier::Admin)
        );
        assert_eq!(
            denying_tier(Some(UserType::Staff), "/admin/centers/create"),
            Some(MenuTier::CenterManager)
        );
    }

    #[test]
    fn test_menu_tiers_overlap() {
        assert_eq!(
            menu_tiers("/admin/centers/create/step-1"),
            vec![
                MenuTier::Admin,
                MenuTier::CenterManager,
                MenuTier::SuperAdminOnly
            ]
        );
        assert_eq!(menu_tiers("/statistics/revenue"), vec![MenuTier::Admin]);
    }

    #[test]
    fn test_admin_tier() {
        assert!(!can_access_menu_path(Some(UserType::Expert), "/schedules"));
        assert!(can_access_menu_path(Some(UserType::Staff), "/schedules"));
        assert!(!can_access_menu_path(None, "/statistics"));
    }

    #[test]
    fn test_super_admin_passes_everything() {
        for prefixes in [
            ADMIN_PATH_PREFIXES,
            CENTER_MANAGER_PATH_PREFIXES,
            SUPER_ADMIN_PATH_PREFIXES,
        ] {
            for path in prefixes {
                assert!(can_access_menu_path(Some(UserType::SuperAdmin), path));
            }
        }
    }
}

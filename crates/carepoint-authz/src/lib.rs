//! # Carepoint Authz
//!
//! The role authority evaluator: pure functions that turn a role (and, where
//! relevant, a pair of center ids or a dashboard path) into an access
//! decision or a [`PermissionSet`].
//!
//! - [`authority`]: rank comparisons, center scoping, principal management
//! - [`menu`]: dashboard path tiers
//!
//! Failure semantics: nothing here returns an error. An absent or unknown
//! role degrades to least privilege; the only fail-open case is a menu path
//! that belongs to no tier.
//!
//! # Example
//!
//! ```ignore
//! use carepoint_authz::{Authority, can_access_menu_path};
//! use carepoint_models::{CenterId, Principal, UserType};
//!
//! let manager = Principal::new(Some(UserType::CenterManager), Some(CenterId::new(12)));
//! assert!(manager.can_access_menu_path("/admin/centers"));
//! assert!(!manager.can_access_menu_path("/admin/centers/create"));
//! ```

pub mod authority;
pub mod menu;

pub use authority::{
    can_access_center, can_manage_principal, center_scope, derive_permission_set, is_admin_role,
    meets_minimum_rank, rank, role_label, visible_centers,
};
pub use menu::{MenuTier, can_access_menu_path, denying_tier, menu_tiers};

use carepoint_models::{CenterId, CenterScope, PermissionSet, Principal, UserType};

/// Evaluator operations bound to a principal's own role and center.
pub trait Authority {
    fn role(&self) -> Option<UserType>;
    fn center(&self) -> Option<CenterId>;

    fn rank(&self) -> u8 {
        rank(self.role())
    }

    fn role_label(&self) -> &'static str {
        role_label(self.role())
    }

    fn is_admin(&self) -> bool {
        is_admin_role(self.role())
    }

    fn meets_minimum_rank(&self, minimum: UserType) -> bool {
        meets_minimum_rank(self.role(), minimum)
    }

    fn can_access_center(&self, target: Option<CenterId>) -> bool {
        can_access_center(self.role(), self.center(), target)
    }

    fn can_manage(&self, target: &Principal) -> bool {
        can_manage_principal(
            self.role(),
            self.center(),
            target.user_type,
            target.center_id,
        )
    }

    fn can_access_menu_path(&self, path: &str) -> bool {
        can_access_menu_path(self.role(), path)
    }

    fn permission_set(&self) -> PermissionSet {
        derive_permission_set(self.role(), self.center())
    }

    fn center_scope(&self) -> CenterScope {
        center_scope(self.role(), self.center())
    }
}

impl Authority for Principal {
    fn role(&self) -> Option<UserType> {
        self.user_type
    }

    fn center(&self) -> Option<CenterId> {
        self.center_id
    }
}

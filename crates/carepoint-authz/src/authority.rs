//! Role authority evaluation.
//!
//! Every function here is total and pure. An absent role (`None`) always
//! degrades to least privilege.

use carepoint_models::{Center, CenterId, CenterScope, PermissionSet, UserType};

/// Ordinal of a role; an absent role ranks as `general` (0).
#[inline]
pub fn rank(role: Option<UserType>) -> u8 {
    role.map_or(0, UserType::rank)
}

/// Role name for logs and metric labels; `none` when absent.
pub fn role_label(role: Option<UserType>) -> &'static str {
    role.map_or("none", UserType::as_str)
}

/// Staff and every role above it.
pub fn is_admin_role(role: Option<UserType>) -> bool {
    matches!(
        role,
        Some(
            UserType::Staff
                | UserType::CenterManager
                | UserType::RegionalManager
                | UserType::SuperAdmin
        )
    )
}

/// `true` when `role` ranks at or above `minimum`. An absent role never qualifies.
pub fn meets_minimum_rank(role: Option<UserType>, minimum: UserType) -> bool {
    role.is_some_and(|r| r.rank() >= minimum.rank())
}

/// Whether a principal may access resources owned by `target_center`.
pub fn can_access_center(
    role: Option<UserType>,
    own_center: Option<CenterId>,
    target_center: Option<CenterId>,
) -> bool {
    match role {
        Some(UserType::SuperAdmin) => true,
        // Meant to be limited to the manager's region; no region data is compared.
        Some(UserType::RegionalManager) => true,
        Some(UserType::CenterManager | UserType::Staff) => same_center(own_center, target_center),
        _ => false,
    }
}

/// Whether an actor may manage (edit, reassign, deactivate) a target principal.
///
/// Regional managers are not restricted by center here, unlike
/// [`can_access_center`].
pub fn can_manage_principal(
    actor_role: Option<UserType>,
    actor_center: Option<CenterId>,
    target_role: Option<UserType>,
    target_center: Option<CenterId>,
) -> bool {
    match actor_role {
        Some(UserType::SuperAdmin) => true,
        Some(UserType::RegionalManager) => target_role != Some(UserType::SuperAdmin),
        Some(UserType::CenterManager) => {
            target_role == Some(UserType::Staff) && same_center(actor_center, target_center)
        }
        _ => false,
    }
}

/// Builds the capability flags for a role and optional center.
pub fn derive_permission_set(role: Option<UserType>, center: Option<CenterId>) -> PermissionSet {
    let center_manager_or_above = meets_minimum_rank(role, UserType::CenterManager);
    let regional_or_above = meets_minimum_rank(role, UserType::RegionalManager);
    let super_admin = role == Some(UserType::SuperAdmin);

    let allowed_center_ids = if super_admin {
        Vec::new()
    } else {
        center.into_iter().collect()
    };

    PermissionSet {
        can_manage_users: center_manager_or_above,
        can_manage_experts: center_manager_or_above,
        can_manage_centers: regional_or_above,
        can_view_all_centers: regional_or_above,
        can_manage_schedules: center_manager_or_above,
        can_approve_vacations: center_manager_or_above,
        can_view_statistics: is_admin_role(role),
        can_manage_system: super_admin,
        allowed_center_ids,
    }
}

/// Unambiguous reading of the centers a principal may see.
///
/// Regional managers get [`CenterScope::All`] to stay consistent with
/// [`can_access_center`], even though their permission set lists only their
/// own center.
pub fn center_scope(role: Option<UserType>, center: Option<CenterId>) -> CenterScope {
    match (role, center) {
        (Some(UserType::SuperAdmin | UserType::RegionalManager), _) => CenterScope::All,
        (_, Some(id)) => CenterScope::RestrictedTo(vec![id]),
        (_, None) => CenterScope::Unassigned,
    }
}

/// Keeps the centers the principal may access, preserving input order.
pub fn visible_centers(
    role: Option<UserType>,
    own_center: Option<CenterId>,
    centers: Vec<Center>,
) -> Vec<Center> {
    centers
        .into_iter()
        .filter(|center| can_access_center(role, own_center, Some(center.id)))
        .collect()
}

fn same_center(a: Option<CenterId>, b: Option<CenterId>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

//! Plain-text rendering of evaluator results.

use carepoint_authz::{
    MenuTier, can_access_center, can_manage_principal, center_scope, denying_tier,
    derive_permission_set, is_admin_role, menu_tiers, rank,
};
use carepoint_models::{CenterId, CenterScope, Principal, UserType};
use std::fmt::Write;

fn role_name(role: Option<UserType>) -> &'static str {
    role.map_or("(none)", UserType::as_str)
}

fn center_name(center: Option<CenterId>) -> String {
    center.map_or_else(|| "(none)".to_string(), |id| id.to_string())
}

fn verdict(allowed: bool) -> &'static str {
    if allowed { "ALLOWED" } else { "DENIED" }
}

fn tier_name(tier: MenuTier) -> &'static str {
    match tier {
        MenuTier::Admin => "admin",
        MenuTier::CenterManager => "center-manager",
        MenuTier::SuperAdminOnly => "super-admin-only",
    }
}

pub fn render_role_table() -> String {
    let mut out = String::from("RANK  ROLE              ADMIN\n");
    for role in UserType::ALL {
        let _ = writeln!(
            out,
            "{:<5} {:<17} {}",
            role.rank(),
            role.as_str(),
            if is_admin_role(Some(role)) { "yes" } else { "no" }
        );
    }
    out
}

pub fn render_permissions(role: Option<UserType>, center: Option<CenterId>) -> String {
    let set = derive_permission_set(role, center);
    let mut out = String::new();

    let _ = writeln!(out, "role:        {} (rank {})", role_name(role), rank(role));
    let _ = writeln!(out, "center:      {}", center_name(center));
    let granted = set.granted();
    let _ = writeln!(
        out,
        "granted:     {}",
        if granted.is_empty() {
            "(nothing)".to_string()
        } else {
            granted.join(", ")
        }
    );
    let ids: Vec<String> = set.allowed_center_ids.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "allowedCenterIds: [{}]", ids.join(", "));
    let scope = match center_scope(role, center) {
        CenterScope::All => "all centers".to_string(),
        CenterScope::RestrictedTo(ids) => format!(
            "restricted to {}",
            ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        ),
        CenterScope::Unassigned => "no center assigned".to_string(),
    };
    let _ = writeln!(out, "scope:       {}", scope);
    out
}

pub fn render_path_check(role: Option<UserType>, path: &str) -> String {
    let tiers = menu_tiers(path);
    let denied_by = denying_tier(role, path);

    let mut out = format!("{} {} for {}\n", verdict(denied_by.is_none()), path, role_name(role));
    if tiers.is_empty() {
        out.push_str("  path is not classified; open to everyone\n");
    } else {
        let names: Vec<&str> = tiers.into_iter().map(tier_name).collect();
        let _ = writeln!(out, "  tiers: {}", names.join(" -> "));
    }
    if let Some(tier) = denied_by {
        let _ = writeln!(out, "  denied by {} tier", tier_name(tier));
    }
    out
}

pub fn render_center_check(
    role: Option<UserType>,
    own_center: Option<CenterId>,
    target_center: Option<CenterId>,
) -> String {
    format!(
        "{} {} (center {}) -> center {}\n",
        verdict(can_access_center(role, own_center, target_center)),
        role_name(role),
        center_name(own_center),
        center_name(target_center)
    )
}

pub fn render_manage_check(actor: &Principal, target: &Principal) -> String {
    format!(
        "{} {} (center {}) managing {} (center {})\n",
        verdict(can_manage_principal(
            actor.user_type,
            actor.center_id,
            target.user_type,
            target.center_id
        )),
        role_name(actor.user_type),
        center_name(actor.center_id),
        role_name(target.user_type),
        center_name(target.center_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table_lists_all_roles() {
        let table = render_role_table();
        for role in UserType::ALL {
            assert!(table.contains(role.as_str()));
        }
        assert!(table.contains("super_admin"));
    }

    #[test]
    fn test_permissions_for_super_admin() {
        let out = render_permissions(Some(UserType::SuperAdmin), Some(CenterId::new(5)));
        assert!(out.contains("canManageSystem"));
        assert!(out.contains("allowedCenterIds: []"));
        assert!(out.contains("all centers"));
    }

    #[test]
    fn test_permissions_for_unassigned_staff() {
        let out = render_permissions(Some(UserType::Staff), None);
        assert!(out.contains("allowedCenterIds: []"));
        assert!(out.contains("no center assigned"));
    }

    #[test]
    fn test_permissions_for_absent_role() {
        let out = render_permissions(None, None);
        assert!(out.contains("(none) (rank 0)"));
        assert!(out.contains("(nothing)"));
    }

    #[test]
    fn test_path_check_denied() {
        let out = render_path_check(Some(UserType::Staff), "/admin/system/settings");
        assert!(out.starts_with("DENIED"));
        assert!(out.contains("denied by super-admin-only tier"));
    }

    #[test]
    fn test_path_check_unclassified() {
        let out = render_path_check(Some(UserType::General), "/some/unlisted/path");
        assert!(out.starts_with("ALLOWED"));
        assert!(out.contains("not classified"));
    }

    #[test]
    fn test_center_and_manage_checks() {
        let out = render_center_check(Some(UserType::Staff), None, Some(CenterId::new(12)));
        assert!(out.starts_with("DENIED"));

        let actor = Principal::new(Some(UserType::CenterManager), Some(CenterId::new(5)));
        let target = Principal::new(Some(UserType::Staff), Some(CenterId::new(5)));
        assert!(render_manage_check(&actor, &target).starts_with("ALLOWED"));
    }
}

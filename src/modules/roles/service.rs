use carepoint_authz::{MenuTier, is_admin_role};
use carepoint_models::UserType;

use super::model::{MenuResponse, RoleInfo, RolesResponse};

pub fn list_roles() -> RolesResponse {
    RolesResponse {
        roles: UserType::ALL
            .into_iter()
            .map(|role| RoleInfo {
                user_type: role,
                rank: role.rank(),
                is_admin: is_admin_role(Some(role)),
            })
            .collect(),
    }
}

fn prefixes(tier: MenuTier) -> Vec<String> {
    tier.prefixes().iter().map(|p| p.to_string()).collect()
}

pub fn menu_prefixes() -> MenuResponse {
    MenuResponse {
        admin: prefixes(MenuTier::Admin),
        center_manager: prefixes(MenuTier::CenterManager),
        super_admin_only: prefixes(MenuTier::SuperAdminOnly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_ranked_in_order() {
        let roles = list_roles().roles;
        assert_eq!(roles.len(), 6);
        assert_eq!(roles[0].user_type, UserType::General);
        assert_eq!(roles[5].user_type, UserType::SuperAdmin);
        assert!(roles.windows(2).all(|w| w[0].rank < w[1].rank));
    }

    #[test]
    fn test_admin_flag() {
        let admins: Vec<UserType> = list_roles()
            .roles
            .into_iter()
            .filter(|r| r.is_admin)
            .map(|r| r.user_type)
            .collect();
        assert_eq!(
            admins,
            vec![
                UserType::Staff,
                UserType::CenterManager,
                UserType::RegionalManager,
                UserType::SuperAdmin
            ]
        );
    }

    #[test]
    fn test_menu_prefixes() {
        let menu = menu_prefixes();
        assert!(menu.admin.contains(&"/counseling-records".to_string()));
        assert!(menu.center_manager.contains(&"/admin/vacations".to_string()));
        assert!(menu.super_admin_only.contains(&"/admin/centers/create".to_string()));
    }
}

//! Derived permission flags.

use crate::ids::CenterId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Capability flags computed from a role and an optional center.
///
/// This is a projection: it is never stored on its own and must be recomputed
/// whenever the role or center changes.
///
/// `allowed_center_ids` is empty in two different situations: for a super
/// admin it means "every center", for anyone without a center it means "no
/// center assigned". Use [`CenterScope`] when the distinction matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_manage_users: bool,
    pub can_manage_experts: bool,
    pub can_manage_centers: bool,
    pub can_view_all_centers: bool,
    pub can_manage_schedules: bool,
    pub can_approve_vacations: bool,
    pub can_view_statistics: bool,
    pub can_manage_system: bool,
    pub allowed_center_ids: Vec<CenterId>,
}

impl PermissionSet {
    /// Names of the flags that are set, in declaration order.
    pub fn granted(&self) -> Vec<&'static str> {
        [
            ("canManageUsers", self.can_manage_users),
            ("canManageExperts", self.can_manage_experts),
            ("canManageCenters", self.can_manage_centers),
            ("canViewAllCenters", self.can_view_all_centers),
            ("canManageSchedules", self.can_manage_schedules),
            ("canApproveVacations", self.can_approve_vacations),
            ("canViewStatistics", self.can_view_statistics),
            ("canManageSystem", self.can_manage_system),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

/// Tagged reading of which centers a principal may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "centerIds", rename_all = "snake_case")]
pub enum CenterScope {
    All,
    RestrictedTo(Vec<CenterId>),
    Unassigned,
}

impl CenterScope {
    pub fn includes(&self, center_id: CenterId) -> bool {
        match self {
            CenterScope::All => true,
            CenterScope::RestrictedTo(ids) => ids.contains(&center_id),
            CenterScope::Unassigned => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let set = PermissionSet {
            can_manage_users: true,
            allowed_center_ids: vec![CenterId::new(5)],
            ..PermissionSet::default()
        };
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["canManageUsers"], true);
        assert_eq!(json["canManageSystem"], false);
        assert_eq!(json["allowedCenterIds"], serde_json::json!([5]));
    }

    #[test]
    fn test_granted_lists_only_set_flags() {
        let set = PermissionSet {
            can_view_statistics: true,
            can_manage_system: true,
            ..PermissionSet::default()
        };
        assert_eq!(set.granted(), vec!["canViewStatistics", "canManageSystem"]);
    }

    #[test]
    fn test_center_scope_includes() {
        assert!(CenterScope::All.includes(CenterId::new(1)));
        assert!(CenterScope::RestrictedTo(vec![CenterId::new(1)]).includes(CenterId::new(1)));
        assert!(!CenterScope::RestrictedTo(vec![CenterId::new(1)]).includes(CenterId::new(2)));
        assert!(!CenterScope::Unassigned.includes(CenterId::new(1)));
    }

    #[test]
    fn test_center_scope_serialization() {
        let json = serde_json::to_value(CenterScope::RestrictedTo(vec![CenterId::new(3)])).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "restricted_to", "centerIds": [3]}));
        let json = serde_json::to_value(CenterScope::All).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "all"}));
    }
}

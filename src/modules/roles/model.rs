use carepoint_models::UserType;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleInfo {
    pub user_type: UserType,
    pub rank: u8,
    pub is_admin: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RolesResponse {
    /// Lowest rank first.
    pub roles: Vec<RoleInfo>,
}

/// The dashboard path prefixes guarded by each tier.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub admin: Vec<String>,
    pub center_manager: Vec<String>,
    pub super_admin_only: Vec<String>,
}

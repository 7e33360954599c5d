use carepoint_authz::MenuTier;
use carepoint_models::{CenterId, CenterScope, PermissionSet, Principal, UserRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_dashboard_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') {
        let mut error = ValidationError::new("path_not_absolute");
        error.message = Some("Path must start with '/'".into());
        return Err(error);
    }
    Ok(())
}

/// The caller as the evaluator sees them.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub principal: Principal,
    pub rank: u8,
    pub is_admin: bool,
    pub permissions: PermissionSet,
    pub center_scope: CenterScope,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckPathRequest {
    #[validate(
        length(min = 1, max = 512, message = "Path must be 1-512 characters"),
        custom(function = "validate_dashboard_path")
    )]
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckPathResponse {
    pub path: String,
    pub allowed: bool,
    /// Tiers the path belongs to, in evaluation order. Empty means unguarded.
    pub tiers: Vec<MenuTier>,
    pub denied_by: Option<MenuTier>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckCenterRequest {
    #[serde(default, alias = "targetCenterId")]
    pub target_center_id: Option<CenterId>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckPrincipalRequest {
    /// Raw user object; `userType`/`user_type` and `centerId`/`center_id` are both accepted.
    pub target: UserRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DecisionResponse {
    pub allowed: bool,
}

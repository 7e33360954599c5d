use carepoint_authz::{Authority, denying_tier, menu_tiers};
use carepoint_models::{CenterId, Principal};
use tracing::{debug, info};

use crate::middleware::role::{check_center_access, check_manage_principal, check_menu_path};

use super::model::{CheckPathResponse, DecisionResponse, MeResponse};

pub fn describe(principal: Principal) -> MeResponse {
    MeResponse {
        rank: principal.rank(),
        is_admin: principal.is_admin(),
        permissions: principal.permission_set(),
        center_scope: principal.center_scope(),
        principal,
    }
}

pub fn check_path(principal: &Principal, path: &str) -> CheckPathResponse {
    let allowed = check_menu_path(principal, path).is_ok();
    let denied_by = denying_tier(principal.user_type, path);

    debug!(path, allowed, ?denied_by, role = principal.role_label(), "Menu path evaluated");

    CheckPathResponse {
        path: path.to_string(),
        allowed,
        tiers: menu_tiers(path),
        denied_by,
    }
}

pub fn check_center(principal: &Principal, target: Option<CenterId>) -> DecisionResponse {
    let allowed = check_center_access(principal, target).is_ok();

    debug!(?target, allowed, role = principal.role_label(), "Center access evaluated");

    DecisionResponse { allowed }
}

pub fn check_principal(actor: &Principal, target: &Principal) -> DecisionResponse {
    let allowed = check_manage_principal(actor, target).is_ok();

    if !allowed {
        info!(
            actor_role = actor.role_label(),
            target_role = target.role_label(),
            "Management of principal denied"
        );
    }

    DecisionResponse { allowed }
}

use carepoint_authz::{Authority, visible_centers};
use carepoint_models::{Center, Principal};
use tracing::debug;

use super::model::VisibleCentersResponse;

pub fn filter_visible(principal: &Principal, centers: Vec<Center>) -> VisibleCentersResponse {
    let requested = centers.len();
    let centers = visible_centers(principal.user_type, principal.center_id, centers);

    debug!(requested, visible = centers.len(), "Filtered centers");

    VisibleCentersResponse {
        centers,
        scope: principal.center_scope(),
    }
}

use axum::Json;
use carepoint_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::validator::ValidatedJson;

use super::model::{VisibleCentersRequest, VisibleCentersResponse};
use super::service;

#[utoipa::path(
    post,
    path = "/api/centers/visible",
    request_body = VisibleCentersRequest,
    responses(
        (status = 200, description = "Centers the caller may access", body = VisibleCentersResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - staff or above required")
    ),
    tag = "Centers",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(role = auth_user.role_label()))]
pub async fn get_visible_centers(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<VisibleCentersRequest>,
) -> Result<Json<VisibleCentersResponse>, AppError> {
    Ok(Json(service::filter_visible(
        &auth_user.principal(),
        dto.centers,
    )))
}

use axum::Json;
use carepoint_core::AppError;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::validator::ValidatedJson;

use super::model::{
    CheckCenterRequest, CheckPathRequest, CheckPathResponse, CheckPrincipalRequest,
    DecisionResponse, MeResponse,
};
use super::service;

#[utoipa::path(
    get,
    path = "/api/permissions/me",
    responses(
        (status = 200, description = "Caller's principal and derived permissions", body = MeResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(role = auth_user.role_label()))]
pub async fn get_my_permissions(auth_user: AuthUser) -> Json<MeResponse> {
    Json(service::describe(auth_user.principal()))
}

#[utoipa::path(
    post,
    path = "/api/permissions/check-path",
    request_body = CheckPathRequest,
    responses(
        (status = 200, description = "Menu path decision", body = CheckPathResponse),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid path")
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(role = auth_user.role_label()))]
pub async fn check_path(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CheckPathRequest>,
) -> Result<Json<CheckPathResponse>, AppError> {
    Ok(Json(service::check_path(&auth_user.principal(), &dto.path)))
}

#[utoipa::path(
    post,
    path = "/api/permissions/check-center",
    request_body = CheckCenterRequest,
    responses(
        (status = 200, description = "Center access decision", body = DecisionResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(role = auth_user.role_label()))]
pub async fn check_center(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CheckCenterRequest>,
) -> Result<Json<DecisionResponse>, AppError> {
    Ok(Json(service::check_center(
        &auth_user.principal(),
        dto.target_center_id,
    )))
}

#[utoipa::path(
    post,
    path = "/api/permissions/check-principal",
    request_body = CheckPrincipalRequest,
    responses(
        (status = 200, description = "Whether the caller may manage the target user", body = DecisionResponse),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(role = auth_user.role_label()))]
pub async fn check_principal(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CheckPrincipalRequest>,
) -> Result<Json<DecisionResponse>, AppError> {
    let target = dto.target.into_principal();
    Ok(Json(service::check_principal(
        &auth_user.principal(),
        &target,
    )))
}

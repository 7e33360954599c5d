use axum::Json;

use super::model::{MenuResponse, RolesResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "All roles, lowest rank first", body = RolesResponse)
    ),
    tag = "Roles"
)]
pub async fn get_roles() -> Json<RolesResponse> {
    Json(service::list_roles())
}

#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Path prefixes guarded by each tier", body = MenuResponse)
    ),
    tag = "Roles"
)]
pub async fn get_menu() -> Json<MenuResponse> {
    Json(service::menu_prefixes())
}

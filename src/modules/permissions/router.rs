use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{check_center, check_path, check_principal, get_my_permissions};

pub fn init_permissions_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_my_permissions))
        .route("/check-path", post(check_path))
        .route("/check-center", post(check_center))
        .route("/check-principal", post(check_principal))
}

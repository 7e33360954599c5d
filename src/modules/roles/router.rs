use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_menu, get_roles};

pub fn init_roles_router() -> Router<AppState> {
    Router::new().route("/", get(get_roles))
}

pub fn init_menu_router() -> Router<AppState> {
    Router::new().route("/", get(get_menu))
}

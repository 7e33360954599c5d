use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::get_visible_centers;

pub fn init_centers_router() -> Router<AppState> {
    Router::new().route("/visible", post(get_visible_centers))
}

use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::health_check;

pub fn init_utils_router() -> Router<AppState> {
    Router::new().route("/health-check", get(health_check))
}

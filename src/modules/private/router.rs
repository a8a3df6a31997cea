use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::create_private_user;

pub fn init_private_router() -> Router<AppState> {
    Router::new().route("/users", post(create_private_user))
}

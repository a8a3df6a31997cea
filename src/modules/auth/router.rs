use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_access_token, test_token};

pub fn init_login_router() -> Router<AppState> {
    Router::new()
        .route("/access-token", post(login_access_token))
        .route("/test-token", post(test_token))
}

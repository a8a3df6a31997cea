use axum::{Router, routing::get};

use crate::modules::users::controller::{
    create_user, delete_user, get_me, get_user_by_id, get_users,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/me", get(get_me))
        .route("/{user_id}", get(get_user_by_id).delete(delete_user))
}

//! Development-only handlers. This router is composed into the app only when
//! the environment tag is `local`; nothing here performs authentication.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{CreateUserDto, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a user directly, without authentication (local environment only)
#[utoipa::path(
    post,
    path = "/api/private/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Email already registered", body = ErrorResponse)
    ),
    tag = "Private"
)]
#[instrument(skip(state, dto))]
pub async fn create_private_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok(Json(user))
}

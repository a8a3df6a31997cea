use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::{CurrentUser, SuperUser};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{CreateUserDto, MessageResponse, User};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all users (superusers only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 403, description = "Not enough privileges", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _superuser: SuperUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Create a new user (superusers only)
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 403, description = "Not enough privileges", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    _superuser: SuperUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok(Json(user))
}

/// Get the current authenticated user
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 400, description = "Inactive user", body = ErrorResponse),
        (status = 403, description = "Could not validate credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(current_user))]
pub async fn get_me(CurrentUser(current_user): CurrentUser) -> Json<User> {
    Json(current_user)
}

/// Get a user by id (self, or any user for superusers)
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 403, description = "Not enough privileges", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, current_user))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    if user_id == current_user.id {
        return Ok(Json(current_user));
    }

    if !current_user.is_superuser {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "The user doesn't have enough privileges"
        )));
    }

    let user = UserService::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

    Ok(Json(user))
}

/// Delete a user (superusers only; self-deletion is rejected)
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 403, description = "Not enough privileges or self-deletion", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, superuser))]
pub async fn delete_user(
    State(state): State<AppState>,
    SuperUser(superuser): SuperUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    if user_id == superuser.id {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Super users are not allowed to delete themselves"
        )));
    }

    UserService::delete_user(&state.db, user_id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

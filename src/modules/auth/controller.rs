use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, TokenResponse};
use super::service::AuthService;

/// Error body shape used across the API, documented once for OpenAPI.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Login and receive a JWT access token
#[utoipa::path(
    post,
    path = "/api/login/access-token",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Incorrect credentials or inactive user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Login"
)]
#[instrument(skip(state, dto))]
pub async fn login_access_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(token))
}

/// Test an access token by resolving it to its user
#[utoipa::path(
    post,
    path = "/api/login/test-token",
    responses(
        (status = 200, description = "Token is valid", body = User),
        (status = 400, description = "Inactive user", body = ErrorResponse),
        (status = 403, description = "Could not validate credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Login"
)]
#[instrument(skip(current_user))]
pub async fn test_token(CurrentUser(current_user): CurrentUser) -> Json<User> {
    Json(current_user)
}

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that authenticates the request and yields the user row.
///
/// The checks run in a fixed order and the first failure wins:
/// missing/malformed header (401), token verification (403), user lookup
/// (404), active flag (400). Token failures never reach the database.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// [`CurrentUser`] plus the superuser gate: rejects with 403 when the
/// resolved user is not flagged as superuser.
#[derive(Debug, Clone)]
pub struct SuperUser(pub User);

fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Not authenticated")))?;

        let token = bearer_token(auth_header)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Not authenticated")))?;

        let claims = verify_token(token, &state.jwt_config)?;

        // A subject that is not a valid id is a malformed claim set, same
        // bucket as a bad signature.
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::forbidden(anyhow::anyhow!("Could not validate credentials")))?;

        let user = UserService::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        if !user.is_active {
            return Err(AppError::bad_request(anyhow::anyhow!("Inactive user")));
        }

        Ok(CurrentUser(user))
    }
}

impl FromRequestParts<AppState> for SuperUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_superuser {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "The user doesn't have enough privileges"
            )));
        }

        Ok(SuperUser(user))
    }
}

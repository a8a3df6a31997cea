//! User data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user account.
///
/// The password hash is selected only inside the service layer and never
/// appears on this struct, so it is safe to serialize in responses.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// DTO for creating a new user.
///
/// Used by the superuser-gated create route and the development-only
/// private route.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub full_name: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

fn default_is_active() -> bool {
    true
}

/// Generic confirmation payload for destructive operations.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

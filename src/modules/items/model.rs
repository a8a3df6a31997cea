use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An item owned by a user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateItemDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// Partial update; absent fields keep their current value.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateItemDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::items::model::{CreateItemDto, Item, UpdateItemDto};
use crate::modules::items::service::ItemService;
use crate::modules::users::model::{MessageResponse, User};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Load an item and enforce ownership. Superusers bypass the owner check.
async fn fetch_item_for(state: &AppState, user: &User, item_id: Uuid) -> Result<Item, AppError> {
    let item = ItemService::find_by_id(&state.db, item_id)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Item not found")))?;

    if !user.is_superuser && item.owner_id != user.id {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Not enough permissions"
        )));
    }

    Ok(item)
}

/// List items (own items, or all items for superusers)
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "List of items", body = Vec<Item>),
        (status = 403, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Items"
)]
#[instrument(skip(state, current_user))]
pub async fn get_items(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = ItemService::get_items(&state.db, &current_user).await?;
    Ok(Json(items))
}

/// Create an item owned by the current user
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemDto,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 403, description = "Could not validate credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Items"
)]
#[instrument(skip(state, current_user, dto))]
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateItemDto>,
) -> Result<Json<Item>, AppError> {
    let item = ItemService::create_item(&state.db, current_user.id, dto).await?;
    Ok(Json(item))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/api/items/{item_id}",
    params(
        ("item_id" = Uuid, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "The requested item", body = Item),
        (status = 400, description = "Not enough permissions", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Items"
)]
#[instrument(skip(state, current_user))]
pub async fn get_item(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(item_id): Path<Uuid>,
) -> Result<Json<Item>, AppError> {
    let item = fetch_item_for(&state, &current_user, item_id).await?;
    Ok(Json(item))
}

/// Update an item
#[utoipa::path(
    put,
    path = "/api/items/{item_id}",
    params(
        ("item_id" = Uuid, Path, description = "Item id")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Not enough permissions", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Items"
)]
#[instrument(skip(state, current_user, dto))]
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(item_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateItemDto>,
) -> Result<Json<Item>, AppError> {
    fetch_item_for(&state, &current_user, item_id).await?;
    let item = ItemService::update_item(&state.db, item_id, dto).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{item_id}",
    params(
        ("item_id" = Uuid, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageResponse),
        (status = 400, description = "Not enough permissions", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Items"
)]
#[instrument(skip(state, current_user))]
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(current_user): CurrentUser,
    Path(item_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    fetch_item_for(&state, &current_user, item_id).await?;
    ItemService::delete_item(&state.db, item_id).await?;

    Ok(Json(MessageResponse {
        message: "Item deleted successfully".to_string(),
    }))
}

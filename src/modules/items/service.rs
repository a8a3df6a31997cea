use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::items::model::{CreateItemDto, Item, UpdateItemDto};
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

pub struct ItemService;

impl ItemService {
    /// List items visible to the user: everything for superusers, only
    /// owned rows otherwise.
    pub async fn get_items(db: &PgPool, user: &User) -> Result<Vec<Item>, AppError> {
        let items = if user.is_superuser {
            sqlx::query_as::<_, Item>(
                "SELECT id, title, description, owner_id FROM items ORDER BY title",
            )
            .fetch_all(db)
            .await?
        } else {
            sqlx::query_as::<_, Item>(
                "SELECT id, title, description, owner_id FROM items
                 WHERE owner_id = $1 ORDER BY title",
            )
            .bind(user.id)
            .fetch_all(db)
            .await?
        };

        Ok(items)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, title, description, owner_id FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(item)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_item(
        db: &PgPool,
        owner_id: Uuid,
        dto: CreateItemDto,
    ) -> Result<Item, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (title, description, owner_id)
             VALUES ($1, $2, $3)
             RETURNING id, title, description, owner_id",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(owner_id)
        .fetch_one(db)
        .await?;

        Ok(item)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_item(db: &PgPool, id: Uuid, dto: UpdateItemDto) -> Result<Item, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "UPDATE items
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description)
             WHERE id = $1
             RETURNING id, title, description, owner_id",
        )
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(db)
        .await?;

        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn delete_item(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{CreateUserDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// Fetch a user by primary key.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, is_active, is_superuser FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, is_active, is_superuser FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, is_active, is_superuser FROM users ORDER BY email",
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        if Self::find_by_email(db, &dto.email).await?.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "The user with this email already exists in the system"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, full_name, hashed_password, is_active, is_superuser)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, email, full_name, is_active, is_superuser",
        )
        .bind(&dto.email)
        .bind(&dto.full_name)
        .bind(&hashed_password)
        .bind(dto.is_active)
        .bind(dto.is_superuser)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    /// Delete a user by primary key. Owned items go with it (FK cascade).
    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("User not found")));
        }

        Ok(())
    }
}

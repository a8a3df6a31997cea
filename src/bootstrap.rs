//! Startup initialization: schema migrations and first-superuser seeding.
//!
//! Runs once, single-threaded, before the server binds its listener. Safe to
//! run repeatedly: migrations are versioned and the superuser insert is
//! guarded by an existence check plus the unique email constraint.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::config::app::AppConfig;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

/// Ensure schema objects exist, then create the configured superuser if no
/// account with that email is present yet.
#[instrument(skip(db, config))]
pub async fn run(db: &PgPool, config: &AppConfig) -> Result<(), AppError> {
    sqlx::migrate!().run(db).await.map_err(AppError::database)?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&config.first_superuser)
        .fetch_one(db)
        .await?;

    if existing == 0 {
        let hashed_password = hash_password(&config.first_superuser_password)?;

        sqlx::query(
            "INSERT INTO users (email, hashed_password, is_active, is_superuser)
             VALUES ($1, $2, TRUE, TRUE)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(&config.first_superuser)
        .bind(&hashed_password)
        .execute(db)
        .await?;

        info!(email = %config.first_superuser, "Created first superuser");
    }

    Ok(())
}

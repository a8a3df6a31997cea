//! PostgreSQL connection pool initialization.
//!
//! The pool is created once at startup from `DATABASE_URL` and shared through
//! [`crate::state::AppState`]. Each query checks a connection out of the pool
//! and returns it when the query future completes, on every path.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database is unreachable.
/// This runs before the server accepts traffic, so failing loudly here is
/// the intended behavior.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

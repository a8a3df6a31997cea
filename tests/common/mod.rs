use packrat::config::app::{AppConfig, Environment};
use packrat::config::cors::CorsConfig;
use packrat::config::jwt::JwtConfig;
use packrat::router::init_router;
use packrat::state::AppState;
use packrat::utils::jwt::create_access_token;
use packrat::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

#[allow(dead_code)]
pub fn test_app_config(environment: Environment) -> AppConfig {
    AppConfig {
        environment,
        first_superuser: "admin@example.com".to_string(),
        first_superuser_password: "changethis".to_string(),
    }
}

/// Build the app the way `main` does, with deterministic test config
/// instead of environment variables.
pub fn setup_test_app(pool: PgPool, environment: Environment) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        app_config: AppConfig {
            environment,
            first_superuser: "admin@example.com".to_string(),
            first_superuser_password: "changethis".to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Insert a user row directly, bypassing the API.
#[allow(dead_code)]
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    is_active: bool,
    is_superuser: bool,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, full_name, hashed_password, is_active, is_superuser)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(email)
    .bind("Test User")
    .bind(&hashed)
    .bind(is_active)
    .bind(is_superuser)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Mint an access token the resolver will accept for the test app.
#[allow(dead_code)]
pub fn token_for(user_id: Uuid) -> String {
    create_access_token(user_id, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, TokenResponse};

pub struct AuthService;

impl AuthService {
    /// Check credentials and issue an access token.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which accounts exist.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            hashed_password: String,
            is_active: bool,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, hashed_password, is_active FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Incorrect email or password")))?;

        if !verify_password(&dto.password, &user.hashed_password)? {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Incorrect email or password"
            )));
        }

        if !user.is_active {
            return Err(AppError::bad_request(anyhow::anyhow!("Inactive user")));
        }

        let access_token = create_access_token(user.id, jwt_config)?;

        Ok(TokenResponse::bearer(access_token))
    }
}

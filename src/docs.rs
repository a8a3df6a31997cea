use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, TokenResponse};
use crate::modules::items::model::{CreateItemDto, Item, UpdateItemDto};
use crate::modules::users::model::{CreateUserDto, MessageResponse, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_access_token,
        crate::modules::auth::controller::test_token,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_me,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::delete_user,
        crate::modules::items::controller::get_items,
        crate::modules::items::controller::create_item,
        crate::modules::items::controller::get_item,
        crate::modules::items::controller::update_item,
        crate::modules::items::controller::delete_item,
        crate::modules::utils::controller::health_check,
        crate::modules::private::controller::create_private_user,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            MessageResponse,
            LoginRequest,
            TokenResponse,
            Item,
            CreateItemDto,
            UpdateItemDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Login", description = "Token issuance and verification"),
        (name = "Users", description = "User management endpoints"),
        (name = "Items", description = "Item management endpoints"),
        (name = "Utils", description = "Service utilities"),
        (name = "Private", description = "Development-only endpoints")
    ),
    info(
        title = "Packrat API",
        version = "0.1.0",
        description = "A REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

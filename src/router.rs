use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::app::Environment;
use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_login_router;
use crate::modules::items::router::init_items_router;
use crate::modules::private::router::init_private_router;
use crate::modules::users::router::init_users_router;
use crate::modules::utils::router::init_utils_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let mut api = Router::new()
        .nest("/login", init_login_router())
        .nest("/users", init_users_router())
        .nest("/utils", init_utils_router())
        .nest("/items", init_items_router());

    // Composed once at startup; requests never branch on the environment.
    if state.app_config.environment == Environment::Local {
        api = api.nest("/private", init_private_router());
    }

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", api)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

use axum::Json;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/utils/health-check",
    responses(
        (status = 200, description = "Service is up", body = bool)
    ),
    tag = "Utils"
)]
pub async fn health_check() -> Json<bool> {
    Json(true)
}

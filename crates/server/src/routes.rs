//! Application route configuration.

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::validator_routes;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Password validation
        .nest("/passwordvalidator", validator_routes())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Password Checker API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Health check endpoint. The service holds no external connections, so
/// liveness is the whole story.
async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

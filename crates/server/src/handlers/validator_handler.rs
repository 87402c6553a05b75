//! Password validation handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use tracing::debug;

use domain::ValidationReport;

use crate::extractors::JsonPayload;
use crate::state::AppState;

/// Create password validation routes.
pub fn validator_routes() -> Router<AppState> {
    Router::new().route("/", post(validate_password))
}

/// Validate a password against the configured rule set.
///
/// The request body is the raw password as a JSON string, not wrapped in
/// an object. Both verdicts return the same report shape; only the status
/// code differs.
#[utoipa::path(
    post,
    path = "/passwordvalidator",
    tag = "Password Validation",
    request_body(
        content = String,
        description = "Password to validate, as a bare JSON string",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Password satisfies every rule", body = ValidationReport),
        (status = 400, description = "Password violates one or more rules", body = ValidationReport)
    )
)]
pub async fn validate_password(
    State(state): State<AppState>,
    JsonPayload(password): JsonPayload<String>,
) -> Response {
    let report = state.validator.validate(&password);

    if report.is_valid {
        (StatusCode::OK, Json(report)).into_response()
    } else {
        debug!(violations = report.errors.len(), "password rejected");
        (StatusCode::BAD_REQUEST, Json(report)).into_response()
    }
}

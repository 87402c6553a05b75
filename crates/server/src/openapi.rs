//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::ValidationReport;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Password Checker API",
        description = "API for validating passwords against a fixed rule set"
    ),
    paths(crate::handlers::validator_handler::validate_password),
    components(schemas(ValidationReport)),
    tags(
        (name = "Password Validation", description = "Password validation endpoints"),
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on handlers and
/// models. Served at `/openapi.json` with Swagger UI under `/docs/`.
///
/// # Endpoints
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `User`: User record (not yet accepted or returned by any endpoint)
/// - `ValidationErrorBody`: Structured user validation failure
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::user::User,
            crate::error::ValidationErrorBody
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Skeleton user management service",
        title = "User Management API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

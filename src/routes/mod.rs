use crate::openapi::ApiDoc;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// # Health Check Endpoint
///
/// Returns `{"status":"ok"}` with `200 OK`.
pub mod health;

/// # Route Table
///
/// ## Mounted Services
/// - Health check (see [`health::configure_routes`])
/// - OpenAPI document at `/openapi.json`
/// - Swagger UI at `/docs/`
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()));
}

use actix_web::{App, HttpServer, middleware::Logger};
use tracing_subscriber::EnvFilter;
use user_management::config::ServerConfig;

/// User Management Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - `GET /health` liveness probe
/// - Swagger UI at `/docs/` and the OpenAPI document at `/openapi.json`
/// - Environment configuration via `.env` file
///
/// # Configuration
/// - `APP_HOST` / `APP_PORT`, default `127.0.0.1:8080`
/// - `RUST_LOG` for log filtering
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("user_management=info,actix_web=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    tracing::info!(host = %config.host, port = config.port, "starting user management API");

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(user_management::routes::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}

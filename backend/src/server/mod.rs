//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, StoreConfig};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use userdir::doc::ApiDoc;
use userdir::inbound::http;
use userdir::inbound::http::health::HealthState;
use userdir::inbound::http::state::HttpState;

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Trailing-slash-insensitive routing: /users/ and /users are the same.
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(NormalizePath::trim())
        .configure(http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind and run the HTTP server until shutdown.
///
/// Readiness flips on only after a successful bind, so probes cannot pass
/// while startup is still in flight.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let http_state = web::Data::new(HttpState::new(config.users));
    let health_state = web::Data::new(HealthState::new());

    let app_http_state = http_state.clone();
    let app_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(app_http_state.clone(), app_health_state.clone())
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, "listening");
    server.run().await
}

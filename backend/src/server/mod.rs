//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use preferences_backend::Trace;
#[cfg(debug_assertions)]
use preferences_backend::doc::ApiDoc;
use preferences_backend::domain::PreferencesService;
use preferences_backend::domain::ports::PreferenceStore;
use preferences_backend::inbound::http::health::{HealthState, live, ready};
use preferences_backend::inbound::http::preferences::configure_preferences;
use preferences_backend::inbound::http::state::HttpState;
use preferences_backend::outbound::memory::InMemoryPreferenceStore;

/// Wire one process-wide store into the HTTP state shared by every worker.
pub(crate) fn build_http_state() -> web::Data<HttpState> {
    let store: Arc<dyn PreferenceStore> = Arc::new(InMemoryPreferenceStore::new());
    let service = Arc::new(PreferencesService::new(store));
    web::Data::new(HttpState::from_service(service))
}

pub(crate) fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_preferences)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state();
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::new(prometheus);
    #[cfg(feature = "metrics")]
    info!(enabled = metrics_layer.is_enabled(), "metrics middleware configured");

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, "preferences server listening");
    Ok(server)
}

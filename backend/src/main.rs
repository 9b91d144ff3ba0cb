//! Preferences service entry-point: loads settings, initialises tracing and
//! runs the HTTP server.

mod server;

use std::io;

use std::ffi::OsString;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use preferences_backend::inbound::http::health::HealthState;
use preferences_backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Build Prometheus middleware, logging and disabling metrics on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "metrics disabled: initialisation failed");
            None
        }
    }
}

/// Load [`ServerSettings`] from `args` and the environment and build the
/// server configuration.
fn load_server_config<I>(args: I) -> io::Result<ServerConfig>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let settings = ServerSettings::load_from_iter(args)
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    Ok(ServerConfig::new(settings.bind_addr()?))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = load_server_config(std::env::args_os())?;

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("preferences")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

use std::sync::Arc;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;
use tracing::{info, warn};

mod api;
mod config;
mod error;
mod i18n;
mod service;

use crate::api::AppState;
use crate::i18n::I18n;
use crate::service::ScriptAssistant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!(
        "Starting YT Script Assistant service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = crate::config::load_config()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        locale = %config.assistant.locale,
        "Configuration loaded"
    );

    let metrics = if config.metrics.enabled {
        install_metrics_recorder()
    } else {
        None
    };

    let i18n = Arc::new(I18n::new());
    let assistant = Arc::new(ScriptAssistant::new(i18n, &config.assistant));
    let state = Arc::new(AppState::new(assistant, metrics, config.metrics.enabled));

    let app = api::router(state, &config);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn install_metrics_recorder() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Failed to install Prometheus recorder, metrics disabled");
            None
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("script_assistant_service=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().event_format(format))
        .with(filter)
        .init();
}

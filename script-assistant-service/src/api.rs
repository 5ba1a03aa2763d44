//! HTTP API for the script assistant.
//!
//! This module provides:
//! - `POST /api/chat`, the chat turn endpoint
//! - `GET /api/tools`, the promoted tool catalog
//! - Health and metrics monitoring

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::error::{I18nError, ServiceError};
use crate::service::ScriptAssistant;

pub mod chat;
pub mod tools;

use chat::chat_handler;
use tools::list_tools_handler;

/// Application state
pub struct AppState {
    pub assistant: Arc<ScriptAssistant>,
    pub start_time: Instant,
    /// Set when the Prometheus recorder was installed
    pub metrics: Option<PrometheusHandle>,
    pub metrics_expected: bool,
}

impl AppState {
    pub fn new(
        assistant: Arc<ScriptAssistant>,
        metrics: Option<PrometheusHandle>,
        metrics_expected: bool,
    ) -> Self {
        Self {
            assistant,
            start_time: Instant::now(),
            metrics,
            metrics_expected,
        }
    }

    /// Create an i18n-aware error from a service error
    pub fn i18n_error(&self, error: ServiceError) -> I18nError {
        I18nError::new(
            error,
            self.assistant.i18n.clone(),
            self.assistant.locale.clone(),
        )
    }
}

/// Build the API router
pub fn router(state: Arc<AppState>, config: &ServiceConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let api_routes = Router::new()
        .route(
            "/chat",
            post(chat_handler).layer(DefaultBodyLimit::max(config.limits.max_request_bytes)),
        )
        .route("/tools", get(list_tools_handler));

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api_routes)
        .layer(catch_panic_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turns a panic inside any handler into the standard error response
pub(crate) fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(panic_response as fn(Box<dyn Any + Send + 'static>) -> Response)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ServiceError::Panicked { message }.into_response()
}

// === Health & Metrics ===

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let i18n = &state.assistant.i18n;
    let locale = &state.assistant.locale;
    let metrics_available = state.metrics.is_some();

    let status = if metrics_available || !state.metrics_expected {
        i18n.get(locale, "health-status-healthy", None)
    } else {
        i18n.format(
            locale,
            "health-status-degraded",
            &[("reason", "metrics recorder unavailable")],
        )
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        metrics_available,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
    metrics_available: bool,
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "metrics recorder not installed\n".to_string(),
        ),
    }
}

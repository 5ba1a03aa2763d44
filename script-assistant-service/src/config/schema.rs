//! Configuration sections. Every field has a default so an empty
//! environment still yields a runnable service.

use serde::Deserialize;

/// Top-level service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_limits")]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default = "default_metrics")]
    pub metrics: MetricsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Size limits
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted chat request body. The whole conversation and the
    /// current script travel with every request.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

/// Reply behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Seed for canned reply selection. Unset means fresh randomness.
    #[serde(default)]
    pub reply_seed: Option<u64>,

    #[serde(default = "default_locale")]
    pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            limits: default_limits(),
            assistant: AssistantConfig::default(),
            metrics: default_metrics(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_seed: None,
            locale: default_locale(),
        }
    }
}

// ==================== Default Value Functions ====================

pub(crate) fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_limits() -> LimitsConfig {
    LimitsConfig {
        max_request_bytes: default_max_request_bytes(),
    }
}

pub(crate) fn default_max_request_bytes() -> usize {
    1024 * 1024
}

pub(crate) fn default_locale() -> String {
    crate::i18n::DEFAULT_LOCALE.to_string()
}

pub(crate) fn default_metrics() -> MetricsConfig {
    MetricsConfig {
        enabled: default_metrics_enabled(),
    }
}

pub(crate) fn default_metrics_enabled() -> bool {
    true
}

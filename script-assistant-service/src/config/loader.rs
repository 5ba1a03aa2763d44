//! Configuration loading from files and environment variables.

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};

use crate::error::{ServiceError, ServiceResult};

use super::schema::ServiceConfig;

/// Prefix for environment overrides, e.g. `SCRIPT_ASSISTANT__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "SCRIPT_ASSISTANT";

/// Load configuration from an optional `config.*` file and env vars
pub fn load_config() -> ServiceResult<ServiceConfig> {
    let builder = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    build_config(builder)
}

pub(crate) fn build_config(builder: ConfigBuilder<DefaultState>) -> ServiceResult<ServiceConfig> {
    builder
        .build()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })
}

//! Service configuration: an optional config file overridden by
//! `SCRIPT_ASSISTANT__*` environment variables.

mod loader;
mod schema;

pub use loader::load_config;
pub use schema::{AssistantConfig, ServiceConfig};

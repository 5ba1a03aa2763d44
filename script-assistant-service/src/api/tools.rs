//! Tool catalog endpoint.

use axum::Json;

use crate::service::templates::{TOOLS, ToolInfo};

/// List the tools the script promotes, in segment order
pub async fn list_tools_handler() -> Json<&'static [ToolInfo]> {
    Json(&TOOLS)
}

//! Chat API endpoint.
//!
//! One turn per request. Whatever goes wrong, the caller gets the same
//! `{ "error": ... }` body with status 500.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::error::{I18nError, ServiceError};
use crate::service::{ChatRequest, ChatResponse};

use super::AppState;

/// Handle a chat turn
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, I18nError> {
    let Json(request) = payload.map_err(|rejection| {
        state.i18n_error(ServiceError::MalformedRequest {
            message: rejection.body_text(),
        })
    })?;

    let response = state
        .assistant
        .handle(&request)
        .map_err(|e| state.i18n_error(e))?;

    Ok(Json(response))
}

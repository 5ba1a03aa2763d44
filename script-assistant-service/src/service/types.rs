//! Wire types for the chat endpoint.
//!
//! Everything here lives for exactly one request: the caller sends the whole
//! conversation and its current script, and gets the script back.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::ActionFlag;

/// Who authored a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// A single chat transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ConversationMessage>,

    /// Script text as the caller currently holds it. Missing and `null` both
    /// mean empty.
    #[serde(default)]
    pub current_script: Option<String>,

    /// Raw action flag; unknown values are treated as absent
    #[serde(default)]
    pub action: Option<String>,
}

impl ChatRequest {
    /// The most recent message written by the user, if any
    pub fn last_user_message(&self) -> Option<&ConversationMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
    }

    pub fn current_script(&self) -> &str {
        self.current_script.as_deref().unwrap_or_default()
    }

    pub fn action_flag(&self) -> Option<ActionFlag> {
        let raw = self.action.as_deref()?;
        match ActionFlag::from_str(raw) {
            Ok(flag) => Some(flag),
            Err(_) => {
                debug!(action = %raw, "Ignoring unknown action flag");
                None
            }
        }
    }
}

/// Successful reply: a chat line plus the (possibly rewritten) script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub script: String,
}

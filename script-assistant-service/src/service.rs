//! Script assistant core: classify the latest user message, then compose a
//! reply from the fixed templates.
//!
//! The service keeps no per-conversation state. Every request carries the
//! full history and the caller's current script, and the updated script goes
//! back in the response.

pub mod composer;
pub mod intent;
pub mod templates;
pub mod types;

pub use composer::{RandomPicker, ReplyPicker, SeededPicker};
pub use types::{ChatRequest, ChatResponse};

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::AssistantConfig;
use crate::error::ServiceResult;
use crate::i18n::I18n;

use composer::{ReplyMessage, compose};
use intent::classify;

/// Main service coordinator
pub struct ScriptAssistant {
    pub i18n: Arc<I18n>,
    pub locale: String,
    picker: Box<dyn ReplyPicker>,
}

impl ScriptAssistant {
    /// Create the assistant from configuration. A configured seed makes
    /// conversational replies reproducible.
    pub fn new(i18n: Arc<I18n>, config: &AssistantConfig) -> Self {
        let picker: Box<dyn ReplyPicker> = match config.reply_seed {
            Some(seed) => {
                info!(seed, "Using seeded reply selection");
                Box::new(SeededPicker::new(seed))
            }
            None => Box::new(RandomPicker),
        };

        Self::with_picker(i18n, config.locale.clone(), picker)
    }

    pub fn with_picker(
        i18n: Arc<I18n>,
        locale: impl Into<String>,
        picker: Box<dyn ReplyPicker>,
    ) -> Self {
        Self {
            i18n,
            locale: locale.into(),
            picker,
        }
    }

    /// Handle one chat turn
    pub fn handle(&self, request: &ChatRequest) -> ServiceResult<ChatResponse> {
        let last_message = request
            .last_user_message()
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        let action = request.action_flag();

        let strategy = classify(action, last_message);
        debug!(
            strategy = %strategy,
            action = ?action,
            message_count = request.messages.len(),
            script_length = request.current_script().len(),
            "Classified chat request"
        );
        let label: &'static str = strategy.into();
        metrics::counter!("script_assistant_requests_total", "strategy" => label).increment(1);

        let composition = compose(strategy, request.current_script(), self.picker.as_ref())?;

        let message = match composition.message {
            ReplyMessage::Status(key) => self.i18n.get(&self.locale, key, None),
            ReplyMessage::Canned(text) => text.to_string(),
        };

        Ok(ChatResponse {
            message,
            script: composition.script,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use composer::tests::FixedPicker;
    use templates::{CONVERSATIONAL_REPLIES, FULL_SCRIPT, HOOK, REFINE_BANNER, TOOL_SEGMENT};

    fn assistant(index: usize) -> ScriptAssistant {
        ScriptAssistant::with_picker(Arc::new(I18n::new()), "en", Box::new(FixedPicker(index)))
    }

    fn request(json: serde_json::Value) -> ChatRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_hook_action_replaces_script() {
        let response = assistant(0)
            .handle(&request(serde_json::json!({
                "messages": [{"role": "user", "content": "anything"}],
                "currentScript": "old draft",
                "action": "generate_hook"
            })))
            .unwrap();

        assert_eq!(response.script, HOOK);
        assert_eq!(
            response.message,
            "I've created a powerful hook for your video! This will grab attention in the first 5 seconds. Check the script panel!"
        );
    }

    #[test]
    fn test_full_script_keyword() {
        let response = assistant(0)
            .handle(&request(serde_json::json!({
                "messages": [{"role": "user", "content": "Please write the complete script"}],
                "currentScript": "old draft"
            })))
            .unwrap();

        assert_eq!(response.script, FULL_SCRIPT);
        assert!(response.message.starts_with("Complete script generated!"));
    }

    #[test]
    fn test_refine_appends_to_current_script() {
        let response = assistant(0)
            .handle(&request(serde_json::json!({
                "messages": [],
                "currentScript": "my script",
                "action": "refine_script"
            })))
            .unwrap();

        assert_eq!(response.script, format!("my script\n\n{}", REFINE_BANNER));
    }

    #[test]
    fn test_segment_keyword_appends_segment() {
        let response = assistant(0)
            .handle(&request(serde_json::json!({
                "messages": [{"role": "user", "content": "Add a segment for Vercept"}],
                "currentScript": "intro"
            })))
            .unwrap();

        assert_eq!(response.script, format!("intro\n\n{}", TOOL_SEGMENT));
        assert_eq!(
            response.message,
            "Added a detailed segment for that tool! Want me to add more details or move to the next one?"
        );
    }

    #[test]
    fn test_empty_history_is_conversational_passthrough() {
        let response = assistant(5)
            .handle(&request(serde_json::json!({
                "messages": [],
                "currentScript": "keep me"
            })))
            .unwrap();

        assert_eq!(response.message, CONVERSATIONAL_REPLIES[5]);
        assert_eq!(response.script, "keep me");
    }

    #[test]
    fn test_only_user_messages_are_classified() {
        // The assistant's own reply mentions "segment" but the user did not
        let response = assistant(1)
            .handle(&request(serde_json::json!({
                "messages": [
                    {"role": "user", "content": "thanks yaar"},
                    {"role": "assistant", "content": "Perfect! Main iske liye ek detailed segment likh sakta hoon."}
                ],
                "currentScript": ""
            })))
            .unwrap();

        assert_eq!(response.message, CONVERSATIONAL_REPLIES[1]);
        assert_eq!(response.script, "");
    }

    #[test]
    fn test_bad_picker_surfaces_processing_error() {
        let err = assistant(99)
            .handle(&request(serde_json::json!({"messages": []})))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Processing { .. }));
    }

    #[test]
    fn test_seeded_config_builds_reproducible_assistant() {
        let config = AssistantConfig {
            reply_seed: Some(11),
            locale: "en".to_string(),
        };
        let a = ScriptAssistant::new(Arc::new(I18n::new()), &config);
        let b = ScriptAssistant::new(Arc::new(I18n::new()), &config);
        let req = request(serde_json::json!({"messages": [{"role": "user", "content": "hi"}]}));

        for _ in 0..5 {
            assert_eq!(a.handle(&req).unwrap(), b.handle(&req).unwrap());
        }
    }
}

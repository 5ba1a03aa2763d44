//! Keyword intent classification.
//!
//! Rules are evaluated top to bottom and the first match wins. Keywords
//! overlap ("improve the hook" matches both hook and refine), so the order of
//! [`RULES`] is part of the behaviour.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Explicit caller hint that bypasses keyword inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionFlag {
    GenerateHook,
    GenerateFullScript,
    RefineScript,
}

/// Which canned response family to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    Hook,
    FullScript,
    Refine,
    AppendSegment,
    Conversational,
}

struct IntentRule {
    action: Option<ActionFlag>,
    keywords: &'static [&'static str],
    strategy: Strategy,
}

impl IntentRule {
    fn matches(&self, action: Option<ActionFlag>, text: &str) -> bool {
        let action_hit = self.action.is_some() && self.action == action;
        action_hit || self.keywords.iter().any(|k| text.contains(k))
    }
}

static RULES: [IntentRule; 4] = [
    IntentRule {
        action: Some(ActionFlag::GenerateHook),
        keywords: &["hook"],
        strategy: Strategy::Hook,
    },
    IntentRule {
        action: Some(ActionFlag::GenerateFullScript),
        keywords: &["full script", "complete script"],
        strategy: Strategy::FullScript,
    },
    IntentRule {
        action: Some(ActionFlag::RefineScript),
        keywords: &["refine", "improve"],
        strategy: Strategy::Refine,
    },
    IntentRule {
        action: None,
        keywords: &["segment", "tool"],
        strategy: Strategy::AppendSegment,
    },
];

/// Pick a strategy from the action flag and the latest user message.
///
/// `message` is matched case-insensitively; pass `""` when there is no user
/// message and the result falls through to [`Strategy::Conversational`].
pub fn classify(action: Option<ActionFlag>, message: &str) -> Strategy {
    let text = message.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(action, &text))
        .map(|rule| rule.strategy)
        .unwrap_or(Strategy::Conversational)
}

//! Renders a [`Strategy`] into a chat reply and the next script text.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ServiceError, ServiceResult};

use super::intent::Strategy;
use super::templates::{
    BLOCK_SEPARATOR, CONVERSATIONAL_REPLIES, FULL_SCRIPT, HOOK, REFINE_BANNER, TOOL_SEGMENT,
};

/// Chooses which canned reply to use. Returns an index into a list of `len`
/// replies.
pub trait ReplyPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG
#[derive(Debug, Default)]
pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible choice from a fixed seed
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReplyPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

/// Chat line to show, before localisation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMessage {
    /// Fluent key of a status line
    Status(&'static str),
    /// Canned conversational text, shown as is
    Canned(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub message: ReplyMessage,
    pub script: String,
}

/// Produce the reply for `strategy`.
///
/// Hook and full script replace the script outright; refine and segment only
/// ever append to `current_script`; conversational replies leave it alone.
pub fn compose(
    strategy: Strategy,
    current_script: &str,
    picker: &dyn ReplyPicker,
) -> ServiceResult<Composition> {
    let composition = match strategy {
        Strategy::Hook => Composition {
            message: ReplyMessage::Status("script-hook-created"),
            script: HOOK.to_string(),
        },
        Strategy::FullScript => Composition {
            message: ReplyMessage::Status("script-full-generated"),
            script: FULL_SCRIPT.to_string(),
        },
        Strategy::Refine => Composition {
            message: ReplyMessage::Status("script-refined"),
            script: refine(current_script),
        },
        Strategy::AppendSegment => Composition {
            message: ReplyMessage::Status("script-segment-added"),
            script: append_block(current_script, TOOL_SEGMENT),
        },
        Strategy::Conversational => Composition {
            message: ReplyMessage::Canned(pick_reply(picker)?),
            script: current_script.to_string(),
        },
    };

    Ok(composition)
}

// Cosmetic only: the banner is the same whatever the script says. Empty
// scripts get the full script instead.
fn refine(current_script: &str) -> String {
    if current_script.is_empty() {
        return FULL_SCRIPT.to_string();
    }
    append_block(current_script, REFINE_BANNER)
}

fn append_block(current_script: &str, block: &str) -> String {
    let mut script =
        String::with_capacity(current_script.len() + BLOCK_SEPARATOR.len() + block.len());
    script.push_str(current_script);
    script.push_str(BLOCK_SEPARATOR);
    script.push_str(block);
    script
}

fn pick_reply(picker: &dyn ReplyPicker) -> ServiceResult<&'static str> {
    let index = picker.pick(CONVERSATIONAL_REPLIES.len());
    CONVERSATIONAL_REPLIES
        .get(index)
        .copied()
        .ok_or_else(|| ServiceError::Processing {
            message: format!(
                "reply index {} out of range ({} replies)",
                index,
                CONVERSATIONAL_REPLIES.len()
            ),
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Always returns the same index
    pub(crate) struct FixedPicker(pub usize);

    impl ReplyPicker for FixedPicker {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    const DRAFT: &str = "📍 HOOK\n\"Guys, aaj hum baat karenge...\"";

    #[test]
    fn test_hook_overwrites_script() {
        let out = compose(Strategy::Hook, DRAFT, &FixedPicker(0)).unwrap();
        assert_eq!(out.script, HOOK);
        assert_eq!(out.message, ReplyMessage::Status("script-hook-created"));
    }

    #[test]
    fn test_full_script_overwrites_script() {
        let out = compose(Strategy::FullScript, DRAFT, &FixedPicker(0)).unwrap();
        assert_eq!(out.script, FULL_SCRIPT);
    }

    #[test]
    fn test_refine_empty_falls_back_to_full_script() {
        let out = compose(Strategy::Refine, "", &FixedPicker(0)).unwrap();
        assert_eq!(out.script, FULL_SCRIPT);
        assert_eq!(out.message, ReplyMessage::Status("script-refined"));
    }

    #[test]
    fn test_refine_appends_banner() {
        let out = compose(Strategy::Refine, DRAFT, &FixedPicker(0)).unwrap();
        assert!(out.script.starts_with(DRAFT));
        assert_eq!(out.script, format!("{}\n\n{}", DRAFT, REFINE_BANNER));
    }

    #[test]
    fn test_refine_twice_stacks_banners() {
        let once = compose(Strategy::Refine, DRAFT, &FixedPicker(0)).unwrap();
        let twice = compose(Strategy::Refine, &once.script, &FixedPicker(0)).unwrap();
        assert!(twice.script.starts_with(&once.script));
        assert_eq!(twice.script.matches("REFINED VERSION").count(), 2);
    }

    #[test]
    fn test_segment_appends_after_blank_line() {
        let out = compose(Strategy::AppendSegment, DRAFT, &FixedPicker(0)).unwrap();
        assert_eq!(out.script, format!("{}\n\n{}", DRAFT, TOOL_SEGMENT));
        assert_eq!(out.message, ReplyMessage::Status("script-segment-added"));
    }

    #[test]
    fn test_segment_on_empty_script() {
        let out = compose(Strategy::AppendSegment, "", &FixedPicker(0)).unwrap();
        assert_eq!(out.script, format!("\n\n{}", TOOL_SEGMENT));
    }

    #[test]
    fn test_conversational_uses_picker_and_keeps_script() {
        let out = compose(Strategy::Conversational, DRAFT, &FixedPicker(3)).unwrap();
        assert_eq!(out.message, ReplyMessage::Canned(CONVERSATIONAL_REPLIES[3]));
        assert_eq!(out.script, DRAFT);
    }

    #[test]
    fn test_out_of_range_pick_is_processing_error() {
        let err = compose(Strategy::Conversational, DRAFT, &FixedPicker(8)).unwrap_err();
        assert!(matches!(err, ServiceError::Processing { .. }));
    }

    #[test]
    fn test_random_picker_stays_in_range() {
        let picker = RandomPicker;
        for _ in 0..200 {
            assert!(picker.pick(CONVERSATIONAL_REPLIES.len()) < CONVERSATIONAL_REPLIES.len());
        }
        assert_eq!(picker.pick(0), 0);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(7);
        let b = SeededPicker::new(7);
        let first: Vec<usize> = (0..20).map(|_| a.pick(8)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.pick(8)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 8));
    }
}

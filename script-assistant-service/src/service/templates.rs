//! Fixed script text. Nothing here is generated; the assistant only picks
//! which block to hand back.

use serde::Serialize;

/// Opening 10 seconds of the video
pub const HOOK: &str = include_str!("../../templates/hook.txt");

/// Hook, intro, one segment per tool, outro and production notes
pub const FULL_SCRIPT: &str = include_str!("../../templates/full_script.txt");

/// Appended after an existing script on refine. Always the same text.
pub const REFINE_BANNER: &str = include_str!("../../templates/refine_banner.txt");

/// Placeholder segment, not specialised per tool
pub const TOOL_SEGMENT: &str = include_str!("../../templates/tool_segment.txt");

/// Joins appended blocks onto the existing script
pub const BLOCK_SEPARATOR: &str = "\n\n";

pub const CONVERSATIONAL_REPLIES: [&str; 8] = [
    "Bilkul! Main aapki help kar sakta hoon. Batao kya specific changes chahiye script mein?",
    "Great question! Let me help you refine that part. Kaunsa section improve karna hai?",
    "Haan, yeh ek important point hai. Should I add this to the script?",
    "Perfect! Main iske liye ek detailed segment likh sakta hoon. Generate karu?",
    "Got it! Would you like me to make the tone more energetic or keep it conversational?",
    "Interesting! Let me work on that. Koi specific style prefer karte ho?",
    "Sure thing! Script mein yeh addition definitely powerful hoga. Add karu?",
    "Absolutely! This will make the script more engaging. Proceed karu?",
];

/// One of the tools the video promotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub category: &'static str,
}

pub const TOOLS: [ToolInfo; 6] = [
    ToolInfo {
        name: "Lover Art",
        category: "AI art generation",
    },
    ToolInfo {
        name: "Base 44",
        category: "Development platform",
    },
    ToolInfo {
        name: "Bhendi AI",
        category: "AI assistant",
    },
    ToolInfo {
        name: "Light PDF",
        category: "PDF editor and converter",
    },
    ToolInfo {
        name: "Vercept",
        category: "Design and productivity",
    },
    ToolInfo {
        name: "Prommpt AI",
        category: "Prompt engineering",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_script_covers_every_tool() {
        for tool in TOOLS {
            assert!(
                FULL_SCRIPT.to_uppercase().contains(&tool.name.to_uppercase()),
                "{} missing from full script",
                tool.name
            );
        }
    }

    #[test]
    fn test_templates_are_trimmed() {
        for template in [HOOK, FULL_SCRIPT, REFINE_BANNER, TOOL_SEGMENT] {
            assert!(!template.is_empty());
            assert!(!template.ends_with('\n'));
        }
        assert!(HOOK.starts_with("🎬 HOOK (0:00 - 0:10)"));
        assert!(REFINE_BANNER.starts_with("====="));
        assert!(TOOL_SEGMENT.contains("Feature 1: [Describe here]"));
    }
}

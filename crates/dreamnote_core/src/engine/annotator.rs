//! Life-context and emotion annotations.
//!
//! # Responsibility
//! - Add sentences driven by the context tag, the emotion tag and the
//!   "returned to where I started" narrative pattern.
//!
//! # Invariants
//! - At most one context sentence fires (`CONTEXT_RULES` order).
//! - The loop sentence is appended after the emotion sentence, never
//!   instead of it.
//! - Output is trimmed and may be empty.

use crate::engine::rules::{contains_any, first_match, Rule};
use crate::model::emotion::EmotionTag;

/// Context cascade over the lowercased context tag.
pub const CONTEXT_RULES: &[Rule] = &[
    Rule::new(
        "exam_stress",
        |context| contains_any(context, &["stress", "exam"]),
        "Given your current exam stress, this dream likely reflects your anxiety about performance and the feeling of being pursued by academic pressures.",
    ),
    Rule::new(
        "work",
        |context| context.contains("work"),
        "Your work-related stress appears to be manifesting in your dreams as scenarios of pursuit or challenge.",
    ),
    Rule::new(
        "relationship",
        |context| context.contains("relationship"),
        "The relationship dynamics in your life may be influencing the interpersonal elements in your dream.",
    ),
];

/// Narrative pattern for dreams that end where they began.
pub const LOOP_RULE: Rule = Rule::new(
    "loop",
    |text| text.contains("back") && contains_any(text, &["where", "started"]),
    "The circular nature of returning to where you started suggests feelings of being stuck or trapped in repetitive patterns.",
);

/// Fixed sentence for emotions that carry one.
pub fn emotion_fragment(emotion: EmotionTag) -> Option<&'static str> {
    match emotion {
        EmotionTag::Confused => Some(
            "Your confusion in the dream mirrors feelings of uncertainty or lack of clarity in your waking life.",
        ),
        EmotionTag::Anxious => {
            Some("The anxiety you felt reflects current worries or concerns that may need attention.")
        }
        EmotionTag::Scared => Some(
            "The fear in your dream suggests you may be confronting something that feels threatening or overwhelming.",
        ),
        EmotionTag::Happy => {
            Some("The positive emotions indicate healthy psychological processing and optimism.")
        }
        EmotionTag::Excited | EmotionTag::Sad | EmotionTag::Peaceful | EmotionTag::Other => None,
    }
}

/// Returns the context sentence for a raw context tag, if any rule fires.
pub fn context_fragment(context: &str) -> Option<&'static str> {
    first_match(CONTEXT_RULES, &context.to_lowercase()).map(|rule| rule.fragment)
}

/// Combines context, emotion and loop sentences.
pub fn annotate(emotion: EmotionTag, context: &str, text: &str) -> String {
    annotate_lowered(emotion, context, &text.to_lowercase())
}

pub(crate) fn annotate_lowered(emotion: EmotionTag, context: &str, lowered_text: &str) -> String {
    let loop_fragment = LOOP_RULE
        .matches(lowered_text)
        .then_some(LOOP_RULE.fragment);

    [context_fragment(context), emotion_fragment(emotion), loop_fragment]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

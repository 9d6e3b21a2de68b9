//! Emotion-level insights shown next to an interpretation.

use crate::model::emotion::EmotionTag;

/// Reflection prompts offered with every interpretation.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Keep a dream journal to track patterns",
    "Reflect on how the dream relates to your current life",
    "Consider what changes the dream might be suggesting",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    pub emotional_significance: &'static str,
    pub recommendations: &'static [&'static str],
}

pub fn additional_insights(emotion: EmotionTag) -> Insights {
    let emotional_significance = match emotion {
        EmotionTag::Anxious => {
            "Your anxiety in the dream may reflect current worries or uncertainties."
        }
        EmotionTag::Happy => "Positive emotions suggest harmony and contentment in your life.",
        EmotionTag::Scared => {
            "Fear in dreams often represents facing the unknown or personal challenges."
        }
        _ => "Your emotions in the dream provide clues about your current state of mind.",
    };

    Insights {
        emotional_significance,
        recommendations: &RECOMMENDATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::{additional_insights, RECOMMENDATIONS};
    use crate::model::emotion::EmotionTag;

    #[test]
    fn unlisted_emotions_share_generic_significance() {
        let confused = additional_insights(EmotionTag::Confused);
        let peaceful = additional_insights(EmotionTag::Peaceful);
        assert_eq!(confused, peaceful);
        assert!(confused.emotional_significance.contains("clues"));
        assert_eq!(confused.recommendations, &RECOMMENDATIONS);
    }

    #[test]
    fn scared_gets_its_own_significance() {
        assert!(additional_insights(EmotionTag::Scared)
            .emotional_significance
            .starts_with("Fear in dreams"));
    }
}

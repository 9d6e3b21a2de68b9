//! Narrative theme classifier.
//!
//! # Responsibility
//! - Pick one dominant theme fragment for a narrative.
//!
//! # Invariants
//! - Themes are checked in `NARRATIVE_RULES` order (chase, flight, water,
//!   dwelling, death); the first hit wins.
//! - Every narrative yields a fragment: `FALLBACK_FRAGMENT` when no rule
//!   matches.

use crate::engine::rules::{contains_any, first_match, Rule};

/// Fragment used when no theme matches.
pub const FALLBACK_FRAGMENT: &str =
    "Your dream reflects current psychological processes and concerns in your waking life.";

/// Rule name reported for the fallback fragment.
pub const FALLBACK_RULE: &str = "fallback";

/// Theme cascade over lowercased narrative text.
pub const NARRATIVE_RULES: &[Rule] = &[
    Rule::new(
        "chase_dog",
        |text| is_chase(text) && text.contains("dog"),
        "Being chased by a dog in dreams often represents loyalty conflicts or feeling pursued by responsibilities you're trying to avoid. The circular nature of returning to where you started suggests you may feel trapped in a recurring situation.",
    ),
    Rule::new(
        "chase",
        is_chase,
        "Being chased in dreams typically represents avoidance of something in waking life that requires your attention.",
    ),
    Rule::new(
        "flying_falling",
        |text| text.contains("flying") && text.contains("falling"),
        "The transition from flying to falling suggests a loss of control or confidence. Flying represents freedom and transcendence, while falling indicates anxiety about losing that control.",
    ),
    Rule::new(
        "flying",
        |text| text.contains("flying"),
        "Flying in dreams often symbolizes liberation, rising above current challenges, or a desire for freedom from constraints.",
    ),
    Rule::new(
        "deep_water",
        |text| text.contains("water") && contains_any(text, &["drowning", "deep"]),
        "Deep water or drowning scenarios often represent feeling overwhelmed by emotions or situations in your life.",
    ),
    Rule::new(
        "water",
        |text| text.contains("water"),
        "Water in dreams typically represents emotions, the subconscious mind, or life transitions.",
    ),
    Rule::new(
        "dwelling",
        |text| contains_any(text, &["house", "home"]),
        "Houses in dreams often represent different aspects of your psyche or your current life situation.",
    ),
    Rule::new(
        "death",
        |text| contains_any(text, &["death", "dying"]),
        "Death in dreams rarely represents literal death, but rather transformation, the end of one phase, and the beginning of another.",
    ),
];

/// Classification outcome: the matched rule name and its fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub rule: &'static str,
    pub fragment: &'static str,
}

/// Classifies raw narrative text.
pub fn classify(text: &str) -> &'static str {
    classify_lowered(&text.to_lowercase()).fragment
}

pub(crate) fn classify_lowered(lowered: &str) -> Classification {
    match first_match(NARRATIVE_RULES, lowered) {
        Some(rule) => Classification {
            rule: rule.name,
            fragment: rule.fragment,
        },
        None => Classification {
            rule: FALLBACK_RULE,
            fragment: FALLBACK_FRAGMENT,
        },
    }
}

fn is_chase(text: &str) -> bool {
    contains_any(text, &["chasing", "chase"])
}

#[cfg(test)]
mod tests {
    use super::{classify, classify_lowered, FALLBACK_FRAGMENT, NARRATIVE_RULES};

    fn rule_for(text: &str) -> &'static str {
        classify_lowered(&text.to_lowercase()).rule
    }

    #[test]
    fn rules_are_declared_in_priority_order() {
        let names: Vec<&str> = NARRATIVE_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec![
                "chase_dog",
                "chase",
                "flying_falling",
                "flying",
                "deep_water",
                "water",
                "dwelling",
                "death",
            ]
        );
    }

    #[test]
    fn chase_outranks_flying() {
        assert_eq!(rule_for("I was chasing a dog while flying"), "chase_dog");
        assert_eq!(rule_for("A chase while FLYING"), "chase");
    }

    #[test]
    fn flying_outranks_water_and_house() {
        assert_eq!(rule_for("flying then falling into water"), "flying_falling");
        assert_eq!(rule_for("flying over my house"), "flying");
    }

    #[test]
    fn water_variants_and_lower_themes() {
        assert_eq!(rule_for("deep water everywhere"), "deep_water");
        assert_eq!(rule_for("I was drowning in water"), "deep_water");
        assert_eq!(rule_for("calm water"), "water");
        assert_eq!(rule_for("back home again"), "dwelling");
        assert_eq!(rule_for("a house of death"), "dwelling");
        assert_eq!(rule_for("someone was dying"), "death");
    }

    #[test]
    fn death_keyword_selects_death_theme() {
        assert_eq!(rule_for("death came for me"), "death");
        assert!(
            classify("Death came").starts_with("Death in dreams rarely represents literal death")
        );
    }

    #[test]
    fn drowning_without_water_is_not_a_water_theme() {
        assert_eq!(rule_for("I was drowning"), "fallback");
    }

    #[test]
    fn unmatched_text_falls_back() {
        assert_eq!(classify("A quiet meadow"), FALLBACK_FRAGMENT);
        assert_eq!(classify(""), FALLBACK_FRAGMENT);
    }
}

//! Per-symbol sentence selection.
//!
//! # Responsibility
//! - Turn each detected symbol into exactly one sentence, using bespoke
//!   phrasing for known co-occurrences and the table meaning otherwise.
//!
//! # Invariants
//! - Output order follows scan order.
//! - Rules for one term are evaluated in `SYMBOL_RULES` order.
//! - No symbols -> empty string.

use crate::engine::rules::contains_any;
use crate::model::emotion::EmotionTag;
use crate::model::symbol::DetectedSymbol;

/// Inputs a symbol rule may inspect besides the term itself.
#[derive(Debug, Clone, Copy)]
pub struct SymbolContext<'a> {
    /// Lowercased narrative text.
    pub lowered: &'a str,
    pub emotion: EmotionTag,
}

/// Bespoke sentence for one term under an extra condition.
#[derive(Clone, Copy)]
pub struct SymbolRule {
    pub name: &'static str,
    pub term: &'static str,
    pub guard: fn(&SymbolContext<'_>) -> bool,
    pub sentence: &'static str,
}

impl std::fmt::Debug for SymbolRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolRule")
            .field("name", &self.name)
            .field("term", &self.term)
            .finish()
    }
}

pub const SYMBOL_RULES: &[SymbolRule] = &[
    SymbolRule {
        name: "chase_dog",
        term: "chase",
        guard: |ctx| ctx.lowered.contains("dog"),
        sentence: "The dog chasing you may represent loyalty, protection, or instinctual drives that you're running from.",
    },
    SymbolRule {
        name: "chase",
        term: "chase",
        guard: |_| true,
        sentence: "The chase element suggests you're avoiding confronting something important in your life.",
    },
    SymbolRule {
        name: "deep_water",
        term: "water",
        guard: |ctx| contains_any(ctx.lowered, &["deep", "ocean"]),
        sentence: "The deep water represents the depth of emotions or subconscious material you're dealing with.",
    },
    SymbolRule {
        name: "happy_flying",
        term: "flying",
        guard: |ctx| ctx.emotion == EmotionTag::Happy,
        sentence: "Flying while feeling happy suggests you're experiencing or seeking greater freedom in your life.",
    },
];

/// Builds one sentence per symbol, joined by single spaces.
pub fn contextualize(symbols: &[DetectedSymbol], text: &str, emotion: EmotionTag) -> String {
    contextualize_lowered(symbols, &text.to_lowercase(), emotion)
}

pub(crate) fn contextualize_lowered(
    symbols: &[DetectedSymbol],
    lowered: &str,
    emotion: EmotionTag,
) -> String {
    let ctx = SymbolContext { lowered, emotion };
    symbols
        .iter()
        .map(|symbol| symbol_sentence(symbol, &ctx))
        .collect::<Vec<_>>()
        .join(" ")
}

fn symbol_sentence(symbol: &DetectedSymbol, ctx: &SymbolContext<'_>) -> String {
    SYMBOL_RULES
        .iter()
        .find(|rule| rule.term == symbol.term && (rule.guard)(ctx))
        .map(|rule| rule.sentence.to_string())
        .unwrap_or_else(|| {
            format!(
                "The {} in your dream suggests {}.",
                symbol.term, symbol.meaning
            )
        })
}

#[cfg(test)]
mod tests {
    use super::contextualize;
    use crate::model::emotion::EmotionTag;
    use crate::model::symbol::DetectedSymbol;

    fn symbol(term: &str, meaning: &str) -> DetectedSymbol {
        DetectedSymbol {
            term: term.to_string(),
            meaning: meaning.to_string(),
        }
    }

    #[test]
    fn chase_sentence_depends_on_dog() {
        let symbols = [symbol("chase", "avoidance")];
        let with_dog = contextualize(&symbols, "A DOG gave chase", EmotionTag::Other);
        assert!(with_dog.starts_with("The dog chasing you"));

        let without_dog = contextualize(&symbols, "a chase", EmotionTag::Other);
        assert!(without_dog.starts_with("The chase element"));
    }

    #[test]
    fn water_uses_depth_sentence_with_ocean_or_deep() {
        let symbols = [symbol("water", "emotions")];
        assert!(
            contextualize(&symbols, "ocean water", EmotionTag::Sad).starts_with("The deep water")
        );
        assert!(
            contextualize(&symbols, "deep water", EmotionTag::Sad).starts_with("The deep water")
        );
        assert_eq!(
            contextualize(&symbols, "calm water", EmotionTag::Sad),
            "The water in your dream suggests emotions."
        );
    }

    #[test]
    fn flying_sentence_requires_happy() {
        let symbols = [symbol("flying", "freedom")];
        assert!(contextualize(&symbols, "flying", EmotionTag::Happy)
            .starts_with("Flying while feeling happy"));
        assert_eq!(
            contextualize(&symbols, "flying", EmotionTag::Excited),
            "The flying in your dream suggests freedom."
        );
    }

    #[test]
    fn chasing_term_uses_generic_sentence() {
        let symbols = [symbol("chasing", "being pursued")];
        assert_eq!(
            contextualize(&symbols, "a dog was chasing me", EmotionTag::Scared),
            "The chasing in your dream suggests being pursued."
        );
    }

    #[test]
    fn sentences_join_in_symbol_order() {
        let symbols = [symbol("snake", "healing"), symbol("door", "opportunities")];
        assert_eq!(
            contextualize(&symbols, "snake door", EmotionTag::Other),
            "The snake in your dream suggests healing. The door in your dream suggests opportunities."
        );
    }

    #[test]
    fn no_symbols_yields_empty_string() {
        assert_eq!(contextualize(&[], "anything", EmotionTag::Happy), "");
    }
}

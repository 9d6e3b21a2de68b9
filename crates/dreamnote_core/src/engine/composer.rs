//! Interpretation composition and the engine entry point.
//!
//! # Responsibility
//! - Run classifier, contextualizer and annotator over one request.
//! - Join their non-empty outputs into the final explanation.
//!
//! # Invariants
//! - Output order is fixed: narrative, symbols, context/emotion.
//! - Empty stage outputs are skipped, never joined as empty strings.
//! - The explanation is never empty (classifier always yields a fragment).
//! - Deterministic: same inputs, same output.

use crate::engine::annotator::annotate_lowered;
use crate::engine::classifier::classify_lowered;
use crate::engine::contextualizer::contextualize_lowered;
use crate::engine::scanner::scan_lowered;
use crate::engine::table::SymbolTable;
use crate::model::emotion::{EmotionTag, InvalidEmotion};
use crate::model::symbol::DetectedSymbol;
use log::debug;
use std::sync::Arc;

/// Result of one interpretation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub explanation: String,
    pub symbols: Vec<DetectedSymbol>,
}

/// Composes the explanation for already-scanned symbols.
pub fn compose(
    text: &str,
    emotion: EmotionTag,
    context: &str,
    symbols: &[DetectedSymbol],
) -> String {
    let lowered = text.to_lowercase();
    compose_lowered(&lowered, emotion, context, symbols).0
}

fn compose_lowered(
    lowered: &str,
    emotion: EmotionTag,
    context: &str,
    symbols: &[DetectedSymbol],
) -> (String, &'static str) {
    let classification = classify_lowered(lowered);
    let mut parts = vec![classification.fragment.to_string()];

    if !symbols.is_empty() {
        parts.push(contextualize_lowered(symbols, lowered, emotion));
    }

    let annotation = annotate_lowered(emotion, context, lowered);
    if !annotation.is_empty() {
        parts.push(annotation);
    }

    (parts.join(" "), classification.rule)
}

/// Rule-based dream interpretation engine.
///
/// Holds a shared read-only symbol table; clones are cheap and several
/// engines with different tables may coexist.
#[derive(Debug, Clone)]
pub struct InterpretationEngine {
    table: Arc<SymbolTable>,
}

impl InterpretationEngine {
    pub fn new(table: Arc<SymbolTable>) -> Self {
        Self { table }
    }

    /// Engine over the built-in vocabulary.
    pub fn canonical() -> Self {
        Self::new(Arc::new(SymbolTable::canonical()))
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Scans `text` against this engine's table.
    pub fn scan(&self, text: &str) -> Vec<DetectedSymbol> {
        scan_lowered(&self.table, &text.to_lowercase())
    }

    /// Interprets one narrative.
    pub fn interpret(&self, text: &str, emotion: EmotionTag, context: &str) -> Interpretation {
        let lowered = text.to_lowercase();
        let symbols = scan_lowered(&self.table, &lowered);
        let (explanation, narrative_rule) = compose_lowered(&lowered, emotion, context, &symbols);

        debug!(
            "event=interpret module=engine status=ok emotion={} symbols={} narrative_rule={} explanation_chars={}",
            emotion,
            symbols.len(),
            narrative_rule,
            explanation.chars().count()
        );

        Interpretation {
            explanation,
            symbols,
        }
    }

    /// Interprets one narrative with an unparsed emotion label.
    ///
    /// # Errors
    /// - Returns `InvalidEmotion` when `emotion_label` is not a known emotion.
    pub fn interpret_labeled(
        &self,
        text: &str,
        emotion_label: &str,
        context: &str,
    ) -> Result<Interpretation, InvalidEmotion> {
        let emotion = EmotionTag::parse_label(emotion_label)?;
        Ok(self.interpret(text, emotion, context))
    }
}

impl Default for InterpretationEngine {
    fn default() -> Self {
        Self::canonical()
    }
}

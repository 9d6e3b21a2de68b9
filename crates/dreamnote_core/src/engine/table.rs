//! Symbol vocabulary table.
//!
//! # Responsibility
//! - Hold the ordered term -> meaning vocabulary used by the scanner.
//! - Validate custom tables before an engine can use them.
//!
//! # Invariants
//! - Terms are unique, non-empty and lowercase.
//! - Declaration order is preserved; it only drives scan-result ordering.
//! - On duplicate terms the first declaration wins.

use crate::model::symbol::{symbol_label, CatalogItem, SymbolEntry};
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CANONICAL_ENTRIES: &[(&str, &str)] = &[
    (
        "flying",
        "freedom, liberation, rising above challenges, spiritual ascension",
    ),
    ("falling", "loss of control, fear of failure, anxiety"),
    (
        "water",
        "emotions, subconscious, purification, life changes",
    ),
    (
        "ocean",
        "vast emotions, the unconscious mind, feeling overwhelmed",
    ),
    ("fire", "passion, destruction, transformation, anger"),
    (
        "animals",
        "instincts, natural self, specific traits of the animal",
    ),
    (
        "dog",
        "loyalty, friendship, protection, or something pursuing you",
    ),
    ("cat", "independence, mystery, feminine energy, intuition"),
    (
        "snake",
        "transformation, healing, hidden knowledge, sexuality",
    ),
    (
        "spider",
        "creativity, feminine power, feeling trapped, web of relationships",
    ),
    ("death", "transformation, ending of a phase, rebirth"),
    ("dying", "transformation, ending of a phase, rebirth"),
    (
        "chase",
        "avoidance, running from problems, fear, being pursued",
    ),
    (
        "chasing",
        "avoidance, running from problems, fear, being pursued",
    ),
    ("running", "trying to escape, avoidance, urgency"),
    ("house", "self, psyche, different aspects of personality"),
    ("home", "security, family, your inner self"),
    ("car", "control over life direction, personal drive"),
    ("driving", "control over life direction, personal autonomy"),
    ("bridge", "transition, connection, overcoming obstacles"),
    ("door", "opportunities, new beginnings, the unknown"),
    (
        "lost",
        "confusion, searching for direction, feeling overwhelmed",
    ),
    ("mirror", "self-reflection, truth, self-awareness"),
    ("school", "learning, being tested, childhood memories"),
    ("exam", "being tested, performance anxiety, evaluation"),
    ("teacher", "authority, learning, guidance"),
    (
        "family",
        "relationships, support systems, childhood influences",
    ),
    ("friend", "aspects of yourself, social connections"),
    ("stranger", "unknown aspects of self, new experiences"),
    ("darkness", "unknown, fear, subconscious, hidden aspects"),
    ("light", "knowledge, clarity, hope, spiritual guidance"),
    ("forest", "the unknown, natural self, getting lost"),
    ("mountain", "challenges, goals, spiritual ascension"),
];

/// Validation error for custom symbol tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolTableError {
    /// Entry at `index` has an empty (or whitespace-only) term.
    EmptyTerm { index: usize },
    /// Term contains uppercase characters; the scanner only matches lowercase.
    NotLowercase { term: String },
    /// Term has no meaning text.
    EmptyMeaning { term: String },
}

impl Display for SymbolTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTerm { index } => write!(f, "symbol entry #{index} has an empty term"),
            Self::NotLowercase { term } => write!(f, "symbol term `{term}` must be lowercase"),
            Self::EmptyMeaning { term } => write!(f, "symbol term `{term}` has an empty meaning"),
        }
    }
}

impl Error for SymbolTableError {}

/// Ordered, immutable symbol vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

impl SymbolTable {
    /// Builds the built-in dream symbol vocabulary.
    pub fn canonical() -> Self {
        Self {
            entries: CANONICAL_ENTRIES
                .iter()
                .map(|(term, meaning)| SymbolEntry::new(*term, *meaning))
                .collect(),
        }
    }

    /// Builds a table from caller-provided entries.
    ///
    /// Duplicate terms are dropped after the first occurrence.
    ///
    /// # Errors
    /// - Returns `SymbolTableError` for empty terms, uppercase terms or empty
    ///   meanings.
    pub fn from_entries<I, T, M>(entries: I) -> Result<Self, SymbolTableError>
    where
        I: IntoIterator<Item = (T, M)>,
        T: Into<String>,
        M: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for (index, (term, meaning)) in entries.into_iter().enumerate() {
            let entry = SymbolEntry::new(term, meaning);
            validate_entry(index, &entry)?;
            if !seen.insert(entry.term.clone()) {
                warn!(
                    "event=symbol_table_build module=engine status=duplicate_dropped index={}",
                    index
                );
                continue;
            }
            kept.push(entry);
        }

        Ok(Self { entries: kept })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the meaning for an exact term.
    pub fn meaning_of(&self, term: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.meaning.as_str())
    }

    /// Display rows for every entry, in declaration order.
    pub fn catalog(&self) -> Vec<CatalogItem> {
        self.entries
            .iter()
            .map(|entry| CatalogItem {
                label: symbol_label(&entry.term),
                term: entry.term.clone(),
                meaning: entry.meaning.clone(),
            })
            .collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::canonical()
    }
}

fn validate_entry(index: usize, entry: &SymbolEntry) -> Result<(), SymbolTableError> {
    if entry.term.trim().is_empty() {
        return Err(SymbolTableError::EmptyTerm { index });
    }
    if entry.term != entry.term.to_lowercase() {
        return Err(SymbolTableError::NotLowercase {
            term: entry.term.clone(),
        });
    }
    if entry.meaning.trim().is_empty() {
        return Err(SymbolTableError::EmptyMeaning {
            term: entry.term.clone(),
        });
    }
    Ok(())
}

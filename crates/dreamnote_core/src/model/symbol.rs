//! Symbol vocabulary model.

use serde::{Deserialize, Serialize};

/// One vocabulary term and its interpretive meaning.
///
/// Terms are non-empty lowercase strings; see `SymbolTable::from_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub term: String,
    pub meaning: String,
}

impl SymbolEntry {
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
        }
    }
}

/// Symbol found in one narrative by the scanner.
///
/// Serialized as `{"symbol": ..., "meaning": ...}` for journal consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSymbol {
    #[serde(rename = "symbol")]
    pub term: String,
    pub meaning: String,
}

impl From<&SymbolEntry> for DetectedSymbol {
    fn from(entry: &SymbolEntry) -> Self {
        Self {
            term: entry.term.clone(),
            meaning: entry.meaning.clone(),
        }
    }
}

/// Display row for the symbol catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Title-cased term, e.g. `Flying`.
    pub label: String,
    pub term: String,
    pub meaning: String,
}

/// Title-cases each space-separated word of a term (`dark forest` -> `Dark Forest`).
pub fn symbol_label(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

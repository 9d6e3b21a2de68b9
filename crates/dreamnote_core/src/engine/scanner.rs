//! Substring scanner over the symbol table.
//!
//! Matching is unanchored containment on the lowercased text, so `car`
//! matches inside `scary` and `cat` inside `cataclysm`. This is a known
//! limitation kept for output compatibility with existing journals.

use crate::engine::table::SymbolTable;
use crate::model::symbol::DetectedSymbol;

/// Returns every table entry whose term occurs in `text`, in table order.
pub fn scan(table: &SymbolTable, text: &str) -> Vec<DetectedSymbol> {
    let lowered = text.to_lowercase();
    scan_lowered(table, &lowered)
}

pub(crate) fn scan_lowered(table: &SymbolTable, lowered: &str) -> Vec<DetectedSymbol> {
    table
        .entries()
        .iter()
        .filter(|entry| lowered.contains(entry.term.as_str()))
        .map(DetectedSymbol::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::scan;
    use crate::engine::table::SymbolTable;

    fn terms(text: &str) -> Vec<String> {
        scan(&SymbolTable::canonical(), text)
            .into_iter()
            .map(|symbol| symbol.term)
            .collect()
    }

    #[test]
    fn scan_is_case_insensitive() {
        assert_eq!(terms("A BRIDGE over a River"), vec!["bridge"]);
    }

    #[test]
    fn scan_returns_table_order_not_text_order() {
        assert_eq!(terms("a snake near the water"), vec!["water", "snake"]);
    }

    #[test]
    fn scan_matches_inside_words() {
        assert_eq!(terms("it was scary"), vec!["car"]);
        assert_eq!(terms("a cataclysm"), vec!["cat"]);
    }

    #[test]
    fn scan_reports_each_term_once() {
        assert_eq!(terms("dying, dying, dying"), vec!["dying"]);
    }

    #[test]
    fn scan_of_empty_text_is_empty() {
        assert!(terms("").is_empty());
    }
}

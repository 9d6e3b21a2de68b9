//! Core domain logic for DreamNote.
//! Rule-based dream interpretation plus the session journal.

pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use engine::annotator::annotate;
pub use engine::classifier::classify;
pub use engine::composer::{compose, Interpretation, InterpretationEngine};
pub use engine::contextualizer::contextualize;
pub use engine::insights::{additional_insights, Insights};
pub use engine::scanner::scan;
pub use engine::table::{SymbolTable, SymbolTableError};
pub use logging::{
    default_log_level, init_logging, init_with, logging_status, LogConfig, LoggingError,
};
pub use model::emotion::{EmotionTag, InvalidEmotion};
pub use model::journal::{EntryId, JournalEntry, JournalRecord};
pub use model::symbol::{symbol_label, CatalogItem, DetectedSymbol, SymbolEntry};
pub use repo::journal_repo::{JournalRepository, RepoError, RepoResult, SqliteJournalRepository};
pub use service::dream_service::{DreamService, DreamServiceError, EMPTY_JOURNAL_MESSAGE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

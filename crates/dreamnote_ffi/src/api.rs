//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose interpretation, symbol catalog and journal calls to Dart via FRB.
//! - Own the per-process session (engine + in-memory journal).
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Journal appends are serialized through the session mutex.
//! - Emotion labels are validated in core; failures come back as
//!   `ok = false` with a message.

use dreamnote_core::db::open_db_in_memory;
use dreamnote_core::{
    additional_insights, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, symbol_label, DetectedSymbol, DreamService, EmotionTag,
    InterpretationEngine, JournalRecord, SqliteJournalRepository, EMPTY_JOURNAL_MESSAGE,
};
use log::warn;
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::sync::Mutex;

static SESSION: OnceCell<Mutex<Session>> = OnceCell::new();

/// Per-process interpretation session.
struct Session {
    engine: InterpretationEngine,
    conn: Connection,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Symbol/meaning pair for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolItem {
    /// Title-cased term for headings (e.g. `Flying`).
    pub label: String,
    pub term: String,
    pub meaning: String,
}

/// Response envelope for one interpretation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretResponse {
    pub ok: bool,
    pub explanation: String,
    pub symbols: Vec<SymbolItem>,
    pub emotional_significance: String,
    pub recommendations: Vec<String>,
    /// Human-readable status for diagnostics/UI.
    pub message: String,
}

impl InterpretResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            explanation: String::new(),
            symbols: Vec::new(),
            emotional_significance: String::new(),
            recommendations: Vec::new(),
            message: message.into(),
        }
    }
}

/// One journal row, newest first in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalItem {
    pub entry_id: String,
    pub heading: String,
    pub recorded_at: String,
    pub dream: String,
    pub emotion: String,
    pub context: String,
    pub interpretation: String,
    pub symbols: Vec<SymbolItem>,
}

/// Journal listing envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalResponse {
    pub items: Vec<JournalItem>,
    pub message: String,
}

/// Emotion choices in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn emotion_options() -> Vec<String> {
    EmotionTag::ALL
        .iter()
        .map(|emotion| emotion.as_str().to_string())
        .collect()
}

/// Full built-in symbol vocabulary for the "about symbols" view.
#[flutter_rust_bridge::frb(sync)]
pub fn symbol_catalog() -> Vec<SymbolItem> {
    InterpretationEngine::canonical()
        .table()
        .catalog()
        .into_iter()
        .map(|item| SymbolItem {
            label: item.label,
            term: item.term,
            meaning: item.meaning,
        })
        .collect()
}

/// Interprets a dream and saves it to the session journal.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Unknown `emotion` labels and blank narratives return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn interpret_dream(dream: String, emotion: String, context: String) -> InterpretResponse {
    let recorded = with_service(|service| {
        service
            .interpret_and_record(dream.as_str(), emotion.as_str(), context.as_str())
            .map_err(|err| err.to_string())
    });

    match recorded {
        Ok(entry) => {
            let insights = additional_insights(entry.emotion);
            InterpretResponse {
                ok: true,
                explanation: entry.explanation,
                symbols: entry.symbols.into_iter().map(to_symbol_item).collect(),
                emotional_significance: insights.emotional_significance.to_string(),
                recommendations: insights
                    .recommendations
                    .iter()
                    .map(|value| value.to_string())
                    .collect(),
                message: "Dream interpretation saved to your journal!".to_string(),
            }
        }
        Err(err) => {
            warn!("event=interpret_dream module=ffi status=error");
            InterpretResponse::failure(format!("interpret_dream failed: {err}"))
        }
    }
}

/// Lists journal entries, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_entries() -> JournalResponse {
    match with_service(|service| service.journal().map_err(|err| err.to_string())) {
        Ok(records) => {
            let message = if records.is_empty() {
                EMPTY_JOURNAL_MESSAGE.to_string()
            } else {
                format!("{} dream(s) recorded.", records.len())
            };
            JournalResponse {
                items: records.into_iter().map(to_journal_item).collect(),
                message,
            }
        }
        Err(err) => JournalResponse {
            items: Vec::new(),
            message: format!("journal_entries failed: {err}"),
        },
    }
}

fn with_service<T>(
    f: impl FnOnce(&DreamService<SqliteJournalRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let session = SESSION.get_or_try_init(|| -> Result<Mutex<Session>, String> {
        let conn = open_db_in_memory().map_err(|err| format!("journal open failed: {err}"))?;
        Ok(Mutex::new(Session {
            engine: InterpretationEngine::canonical(),
            conn,
        }))
    })?;
    let guard = session
        .lock()
        .map_err(|_| "journal session lock poisoned".to_string())?;
    let repo = SqliteJournalRepository::try_new(&guard.conn)
        .map_err(|err| format!("journal repo init failed: {err}"))?;
    let service = DreamService::new(guard.engine.clone(), repo);
    f(&service)
}

fn to_symbol_item(symbol: DetectedSymbol) -> SymbolItem {
    SymbolItem {
        label: symbol_label(&symbol.term),
        term: symbol.term,
        meaning: symbol.meaning,
    }
}

fn to_journal_item(record: JournalRecord) -> JournalItem {
    let heading = record.heading();
    let entry = record.entry;
    JournalItem {
        entry_id: entry.entry_id.to_string(),
        heading,
        recorded_at: record.recorded_label,
        dream: entry.narrative,
        emotion: entry.emotion.as_str().to_string(),
        context: entry.context,
        interpretation: entry.explanation,
        symbols: entry.symbols.into_iter().map(to_symbol_item).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, emotion_options, init_logging, interpret_dream, journal_entries, ping,
        symbol_catalog,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn emotion_options_list_all_eight_choices() {
        let options = emotion_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options.first().map(String::as_str), Some("Happy"));
        assert_eq!(options.last().map(String::as_str), Some("Other"));
    }

    #[test]
    fn symbol_catalog_uses_title_case_labels() {
        let catalog = symbol_catalog();
        assert_eq!(catalog[0].label, "Flying");
        assert!(catalog.iter().any(|item| item.term == "mountain"));
    }

    #[test]
    fn interpret_dream_records_entry_in_journal() {
        let token = unique_token("mirror");
        let response = interpret_dream(
            format!("I saw a mirror marked {token}"),
            "Anxious".to_string(),
            "exam season".to_string(),
        );
        assert!(response.ok, "{}", response.message);
        assert!(response.symbols.iter().any(|item| item.label == "Mirror"));
        assert_eq!(response.recommendations.len(), 3);
        assert!(response.emotional_significance.contains("anxiety"));

        let journal = journal_entries();
        let item = journal
            .items
            .iter()
            .find(|item| item.dream.contains(&token))
            .expect("recorded dream should be listed");
        assert_eq!(item.emotion, "Anxious");
        assert!(item.heading.ends_with(" - Anxious"));
    }

    #[test]
    fn interpret_dream_records_text_as_submitted() {
        let token = unique_token("door");
        let dream = format!("  a door marked {token}\n");
        let context = " moving house ".to_string();
        let response = interpret_dream(dream.clone(), "Peaceful".to_string(), context.clone());
        assert!(response.ok, "{}", response.message);

        let journal = journal_entries();
        let item = journal
            .items
            .iter()
            .find(|item| item.dream.contains(&token))
            .expect("recorded dream should be listed");
        assert_eq!(item.dream, dream);
        assert_eq!(item.context, context);
    }

    #[test]
    fn interpret_dream_rejects_unknown_emotion() {
        let response = interpret_dream(
            "flying".to_string(),
            "NotARealEmotion".to_string(),
            String::new(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("invalid emotion"));
    }

    #[test]
    fn interpret_dream_rejects_blank_narrative() {
        let response = interpret_dream("   ".to_string(), "Happy".to_string(), String::new());
        assert!(!response.ok);
        assert!(response.message.contains("empty"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}

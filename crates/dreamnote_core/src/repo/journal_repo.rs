//! Journal repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Append completed interpretation records.
//! - Replay records newest first for journal display.
//!
//! # Invariants
//! - Display order is reverse append order (`seq DESC`), independent of
//!   wall-clock timestamps.
//! - Detected symbols are replayed in their original scan order.
//! - One append writes the entry and its symbols in a single transaction.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::emotion::EmotionTag;
use crate::model::journal::{JournalEntry, JournalRecord};
use crate::model::symbol::DetectedSymbol;
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    seq,
    entry_id,
    recorded_at,
    strftime('%Y-%m-%d %H:%M:%S', recorded_at / 1000, 'unixepoch') AS recorded_label,
    narrative,
    emotion,
    context,
    explanation
FROM journal_entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Journal persistence and query error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection schema does not match this binary's migrations.
    SchemaNotReady { found: u32, expected: u32 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::SchemaNotReady { found, expected } => write!(
                f,
                "journal schema not ready: found version {found}, expected {expected}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted journal data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::SchemaNotReady { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the session journal.
pub trait JournalRepository {
    /// Appends one entry at the end of the journal.
    fn append(&self, entry: &JournalEntry) -> RepoResult<()>;
    /// Returns every entry, newest first.
    fn list_all(&self) -> RepoResult<Vec<JournalRecord>>;
    /// Number of stored entries.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed journal repository.
pub struct SqliteJournalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteJournalRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - Returns `SchemaNotReady` when migrations were not applied.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let found = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected = latest_version();
        if found != expected {
            return Err(RepoError::SchemaNotReady { found, expected });
        }
        Ok(Self { conn })
    }
}

impl JournalRepository for SqliteJournalRepository<'_> {
    fn append(&self, entry: &JournalEntry) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO journal_entries (
                entry_id,
                recorded_at,
                narrative,
                emotion,
                context,
                explanation
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                entry.entry_id.to_string(),
                entry.recorded_at,
                entry.narrative.as_str(),
                entry.emotion.as_str(),
                entry.context.as_str(),
                entry.explanation.as_str(),
            ],
        )?;
        let seq = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO journal_symbols (entry_seq, position, term, meaning)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            for (position, symbol) in entry.symbols.iter().enumerate() {
                let position = i64::try_from(position).map_err(|_| {
                    RepoError::InvalidData(format!("symbol position {position} out of range"))
                })?;
                stmt.execute(params![
                    seq,
                    position,
                    symbol.term.as_str(),
                    symbol.meaning.as_str()
                ])?;
            }
        }

        if let Err(err) = tx.commit() {
            error!(
                "event=journal_append module=repo status=error error_code=commit_failed error={}",
                err
            );
            return Err(err.into());
        }

        info!(
            "event=journal_append module=repo status=ok entry_id={} symbols={}",
            entry.entry_id,
            entry.symbols.len()
        );
        Ok(())
    }

    fn list_all(&self) -> RepoResult<Vec<JournalRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY seq DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_entry_row(self.conn, row)?);
        }

        Ok(records)
    }

    fn count(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM journal_entries;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative entry count {count}")))
    }
}

fn parse_entry_row(conn: &Connection, row: &Row<'_>) -> RepoResult<JournalRecord> {
    let seq: i64 = row.get("seq")?;

    let id_text: String = row.get("entry_id")?;
    let entry_id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{id_text}` in journal_entries.entry_id"
        ))
    })?;

    let emotion_text: String = row.get("emotion")?;
    let emotion = EmotionTag::parse_label(&emotion_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid emotion `{emotion_text}` in journal_entries.emotion"
        ))
    })?;

    let entry = JournalEntry {
        entry_id,
        recorded_at: row.get("recorded_at")?,
        narrative: row.get("narrative")?,
        emotion,
        context: row.get("context")?,
        explanation: row.get("explanation")?,
        symbols: load_symbols(conn, seq)?,
    };

    Ok(JournalRecord {
        entry,
        recorded_label: row.get("recorded_label")?,
    })
}

fn load_symbols(conn: &Connection, seq: i64) -> RepoResult<Vec<DetectedSymbol>> {
    let mut stmt = conn.prepare(
        "SELECT term, meaning
         FROM journal_symbols
         WHERE entry_seq = ?1
         ORDER BY position ASC;",
    )?;
    let symbols = stmt
        .query_map([seq], |row| {
            Ok(DetectedSymbol {
                term: row.get("term")?,
                meaning: row.get("meaning")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(symbols)
}

//! Journal record model.
//!
//! # Responsibility
//! - Capture one completed interpretation (inputs + outputs) as an
//!   immutable record.
//! - Provide the display read model used by journal listings.
//!
//! # Invariants
//! - `entry_id` is a v4 UUID and never reused.
//! - Records are never mutated after creation; storage is append-only.

use crate::model::emotion::EmotionTag;
use crate::model::symbol::DetectedSymbol;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one journal entry.
pub type EntryId = Uuid;

/// Immutable record of a completed interpretation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry_id: EntryId,
    /// Unix epoch milliseconds at creation.
    pub recorded_at: i64,
    /// Serialized as `dream` to match the journal export shape.
    #[serde(rename = "dream")]
    pub narrative: String,
    pub emotion: EmotionTag,
    pub context: String,
    #[serde(rename = "interpretation")]
    pub explanation: String,
    pub symbols: Vec<DetectedSymbol>,
}

impl JournalEntry {
    /// Creates a record stamped with a fresh ID and the current time.
    pub fn new(
        narrative: impl Into<String>,
        emotion: EmotionTag,
        context: impl Into<String>,
        explanation: impl Into<String>,
        symbols: Vec<DetectedSymbol>,
    ) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            recorded_at: now_epoch_ms(),
            narrative: narrative.into(),
            emotion,
            context: context.into(),
            explanation: explanation.into(),
            symbols,
        }
    }
}

/// Read model for journal display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalRecord {
    pub entry: JournalEntry,
    /// `YYYY-MM-DD HH:MM:SS` (UTC) rendering of `entry.recorded_at`.
    pub recorded_label: String,
}

impl JournalRecord {
    /// Listing heading, e.g. `Dream from 2026-10-16 09:30:00 - Anxious`.
    pub fn heading(&self) -> String {
        format!(
            "Dream from {} - {}",
            self.recorded_label,
            self.entry.emotion.as_str()
        )
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

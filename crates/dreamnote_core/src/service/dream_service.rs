//! Dream interpretation use-case service.
//!
//! # Responsibility
//! - Validate raw emotion labels before they reach the engine.
//! - Run interpretations and append completed ones to the journal.
//!
//! # Invariants
//! - Unknown emotion labels fail with `InvalidEmotion`; nothing is recorded.
//! - Only non-blank narratives are recorded.
//! - One recorded interpretation produces exactly one journal entry.

use crate::engine::composer::{Interpretation, InterpretationEngine};
use crate::model::emotion::{EmotionTag, InvalidEmotion};
use crate::model::journal::{JournalEntry, JournalRecord};
use crate::repo::journal_repo::{JournalRepository, RepoError, RepoResult};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown when the journal has no entries yet.
pub const EMPTY_JOURNAL_MESSAGE: &str =
    "No dreams recorded yet. Go to the Dream Interpretation section to analyze your first dream!";

/// Service error for interpretation use-cases.
#[derive(Debug)]
pub enum DreamServiceError {
    /// Emotion label outside the closed enumeration.
    InvalidEmotion(InvalidEmotion),
    /// Blank narrative submitted for recording.
    EmptyNarrative,
    /// Journal persistence failure.
    Repo(RepoError),
}

impl Display for DreamServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmotion(err) => write!(f, "{err}"),
            Self::EmptyNarrative => write!(f, "dream narrative cannot be empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DreamServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEmotion(err) => Some(err),
            Self::EmptyNarrative => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<InvalidEmotion> for DreamServiceError {
    fn from(value: InvalidEmotion) -> Self {
        Self::InvalidEmotion(value)
    }
}

impl From<RepoError> for DreamServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Interpretation facade over an engine and a journal repository.
pub struct DreamService<R: JournalRepository> {
    engine: InterpretationEngine,
    journal: R,
}

impl<R: JournalRepository> DreamService<R> {
    pub fn new(engine: InterpretationEngine, journal: R) -> Self {
        Self { engine, journal }
    }

    pub fn engine(&self) -> &InterpretationEngine {
        &self.engine
    }

    /// Interprets without recording.
    pub fn interpret(
        &self,
        text: &str,
        emotion_label: &str,
        context: &str,
    ) -> Result<Interpretation, DreamServiceError> {
        let emotion = parse_emotion(emotion_label)?;
        Ok(self.engine.interpret(text, emotion, context))
    }

    /// Interprets and appends the result to the journal.
    ///
    /// Returns the stored entry.
    pub fn interpret_and_record(
        &self,
        text: &str,
        emotion_label: &str,
        context: &str,
    ) -> Result<JournalEntry, DreamServiceError> {
        let emotion = parse_emotion(emotion_label)?;
        if text.trim().is_empty() {
            return Err(DreamServiceError::EmptyNarrative);
        }

        let Interpretation {
            explanation,
            symbols,
        } = self.engine.interpret(text, emotion, context);
        let entry = JournalEntry::new(text, emotion, context, explanation, symbols);
        self.journal.append(&entry)?;
        Ok(entry)
    }

    /// Journal entries, newest first.
    pub fn journal(&self) -> RepoResult<Vec<JournalRecord>> {
        self.journal.list_all()
    }
}

fn parse_emotion(label: &str) -> Result<EmotionTag, DreamServiceError> {
    EmotionTag::parse_label(label).map_err(|err| {
        warn!("event=interpret module=service status=rejected error_code=invalid_emotion");
        DreamServiceError::from(err)
    })
}

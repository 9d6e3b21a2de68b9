//! Emotion tag model.
//!
//! # Responsibility
//! - Define the closed set of emotions a dreamer can report.
//! - Reject unknown labels at the boundary instead of passing strings inward.
//!
//! # Invariants
//! - Every request carries exactly one `EmotionTag`.
//! - Parsing is trim + case-insensitive; anything else is `InvalidEmotion`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Emotion felt by the dreamer during the narrated dream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionTag {
    Happy,
    Anxious,
    Scared,
    Confused,
    Excited,
    Sad,
    Peaceful,
    Other,
}

impl EmotionTag {
    /// All emotions in front-end display order.
    pub const ALL: [EmotionTag; 8] = [
        EmotionTag::Happy,
        EmotionTag::Anxious,
        EmotionTag::Scared,
        EmotionTag::Confused,
        EmotionTag::Excited,
        EmotionTag::Sad,
        EmotionTag::Peaceful,
        EmotionTag::Other,
    ];

    /// Returns the canonical display label (`"Happy"`, `"Anxious"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Anxious => "Anxious",
            Self::Scared => "Scared",
            Self::Confused => "Confused",
            Self::Excited => "Excited",
            Self::Sad => "Sad",
            Self::Peaceful => "Peaceful",
            Self::Other => "Other",
        }
    }

    /// Parses a caller-provided label.
    ///
    /// # Errors
    /// - Returns `InvalidEmotion` when the label names no known emotion.
    pub fn parse_label(label: &str) -> Result<Self, InvalidEmotion> {
        let normalized = label.trim();
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| InvalidEmotion {
                label: label.to_string(),
            })
    }
}

impl Display for EmotionTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionTag {
    type Err = InvalidEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

/// Boundary error for labels outside the emotion enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEmotion {
    /// Raw label as received from the caller.
    pub label: String,
}

impl Display for InvalidEmotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid emotion `{}`; expected Happy|Anxious|Scared|Confused|Excited|Sad|Peaceful|Other",
            self.label
        )
    }
}

impl Error for InvalidEmotion {}

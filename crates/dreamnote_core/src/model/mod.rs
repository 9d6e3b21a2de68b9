//! Domain model for dream interpretation requests and journal records.
//!
//! # Responsibility
//! - Define the value types exchanged between engine, journal and callers.
//! - Keep boundary validation (emotion labels) next to the types it guards.
//!
//! # Invariants
//! - Model values are immutable once produced by the engine.
//! - Emotion values are always members of the closed `EmotionTag` set.

pub mod emotion;
pub mod journal;
pub mod symbol;

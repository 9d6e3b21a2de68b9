//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the journal storage contract consumed by services.
//! - Isolate SQLite query details from interpretation orchestration.
//!
//! # Invariants
//! - Journal storage is append-only; no repository API mutates or removes
//!   an existing entry.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod journal_repo;

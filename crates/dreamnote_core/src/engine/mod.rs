//! Rule-based interpretation engine.
//!
//! # Responsibility
//! - Detect vocabulary symbols in a narrative.
//! - Compose an explanation from canned fragments chosen by ordered rules.
//!
//! # Invariants
//! - Every stage is a pure function of its inputs; the symbol table is
//!   read-only and shared by reference.
//! - Matching runs on lowercased text using unanchored substring checks.

pub mod annotator;
pub mod classifier;
pub mod composer;
pub mod contextualizer;
pub mod insights;
pub mod rules;
pub mod scanner;
pub mod table;

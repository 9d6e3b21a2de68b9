//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate engine and journal calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod dream_service;

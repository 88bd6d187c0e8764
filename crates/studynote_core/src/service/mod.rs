//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate template, tag and store calls into use-case level APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod note_service;

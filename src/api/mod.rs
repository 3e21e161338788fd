//! WASM API for the paradigm table core
//!
//! This module provides the JavaScript-facing API. It includes shared
//! utilities for serialization, validation, and error handling, and
//! the API functions organized by functional domain:
//!
//! - `helpers`: serialization, error handling, and console logging
//! - `tables`: paradigm table rendering
//! - `pronounce`: transcription tokenization and the pronunciation guide
//! - `review`: the review-flag edit session and its batched save

pub mod helpers;
pub mod pronounce;
pub mod review;
pub mod tables;

// Re-export all public functions to keep a flat JS-facing surface
pub use pronounce::{pronunciation_guide, tokenize_transcription};
pub use review::{
    begin_review_edit, begin_review_save, cancel_review_edit, complete_review_save,
    review_session_state, toggle_review_flag,
};
pub use tables::render_paradigm_table;

//! Grammatical Paradigm WASM Module
//!
//! This is the WASM module backing the word-detail screens of the
//! language-learning frontend. It renders grammatical paradigm tables
//! (verb / noun / adjective) to a grid description, tracks review-flag
//! edits against table cells, and tokenizes phonetic transcriptions
//! for the pronunciation guide.

pub mod models;
pub mod layout;
pub mod pronounce;
pub mod review;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::paradigm::*;
pub use layout::{GridBuilder, GridCell, GridDescription, GridRow, GridSection};
pub use review::{ReviewError, ReviewOverlay, ReviewUpdate, ReviewWriter, SessionState};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Paradigm table WASM module initialized");
}

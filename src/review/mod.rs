//! Review-flag edit sessions
//!
//! This module tracks pending review-flag edits against an immutable
//! base table and batches them into a single write.

pub mod overlay;

pub use overlay::{ReviewError, ReviewOverlay, ReviewUpdate, ReviewWriter, SessionState};

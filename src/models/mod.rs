//! Models module for the paradigm table core
//!
//! This module contains the data model for fetched paradigm tables:
//! the form entries produced by the morphology service and the typed
//! verb / noun / adjective table variants they are delivered in.

pub mod core;
pub mod paradigm;

// Re-export commonly used types
pub use self::core::*;
pub use self::paradigm::*;

//! Pending review-flag edits over an immutable base table
//!
//! Base `FormEntry` values are never mutated. Edits accumulate in an
//! overlay keyed by word id, and the effective flag for rendering is
//! the overlay value when present, the stored baseline otherwise. The
//! overlay tracks *touched* ids, not changed ones: toggling a cell
//! twice restores its effective value but the id stays in the save
//! payload.
//!
//! The edit session is an explicit state machine,
//! `Idle → Editing → Saving → Idle`. Save is split-phase so the host
//! can perform the network write between the two transitions; a second
//! save while one is in flight is rejected rather than duplicated, and
//! a failed save leaves the overlay and session intact for a retry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::core::FormEntry;

/// Edit-session lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No session open; the table is read-only
    Idle,

    /// Session open; toggles are accepted
    Editing,

    /// A batched write is in flight; toggles and further saves are
    /// rejected until the host reports the outcome
    Saving,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

/// One element of the batched write payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub word_id: i64,
    pub needs_review: bool,
}

/// Errors of the edit-session state machine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("no edit session is open")]
    SessionClosed,

    #[error("a review save is already in flight")]
    SaveInFlight,

    #[error("batched review write failed: {0}")]
    WriteFailed(String),
}

/// Destination of the batched write. The single write per save carries
/// every touched id; only success or failure of the call is
/// interpreted.
pub trait ReviewWriter {
    fn write_batch(&mut self, updates: &[ReviewUpdate]) -> Result<(), String>;
}

/// Pending review-flag edits plus the edit-session state
#[derive(Debug, Clone, Default)]
pub struct ReviewOverlay {
    state: SessionState,
    pending: BTreeMap<i64, bool>,
}

impl ReviewOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of touched entries
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Open an edit session. Opening an already-open session is a
    /// no-op; opening during an in-flight save is rejected.
    pub fn begin_edit(&mut self) -> Result<(), ReviewError> {
        match self.state {
            SessionState::Saving => Err(ReviewError::SaveInFlight),
            _ => {
                self.state = SessionState::Editing;
                Ok(())
            }
        }
    }

    /// Close the session and discard all pending edits
    pub fn cancel_edit(&mut self) -> Result<(), ReviewError> {
        match self.state {
            SessionState::Saving => Err(ReviewError::SaveInFlight),
            _ => {
                self.pending.clear();
                self.state = SessionState::Idle;
                Ok(())
            }
        }
    }

    /// Flip the pending value for `word_id`, last write wins.
    /// `base_value` is the entry's stored flag, used the first time an
    /// id is touched. Outside an open edit session this is a no-op and
    /// returns `None`; otherwise the new effective value is returned.
    pub fn toggle(&mut self, word_id: i64, base_value: bool) -> Option<bool> {
        if self.state != SessionState::Editing {
            return None;
        }
        let current = self.pending.get(&word_id).copied().unwrap_or(base_value);
        let flipped = !current;
        self.pending.insert(word_id, flipped);
        Some(flipped)
    }

    /// Toggle by entry, for callers holding the form itself. Blank
    /// slots have no id and are never toggled.
    pub fn toggle_entry(&mut self, entry: &FormEntry) -> Option<bool> {
        let id = entry.id?;
        self.toggle(id, entry.needs_review)
    }

    /// Effective review flag for rendering: the overlay value when the
    /// entry has been touched, the stored baseline otherwise
    pub fn effective(&self, entry: &FormEntry) -> bool {
        match entry.id {
            Some(id) => self.effective_value(id, entry.needs_review),
            None => entry.needs_review,
        }
    }

    /// Effective flag by id
    pub fn effective_value(&self, word_id: i64, base_value: bool) -> bool {
        self.pending.get(&word_id).copied().unwrap_or(base_value)
    }

    /// The batched write payload: every touched id with its pending
    /// value, in stable id order
    pub fn payload(&self) -> Vec<ReviewUpdate> {
        self.pending
            .iter()
            .map(|(&word_id, &needs_review)| ReviewUpdate {
                word_id,
                needs_review,
            })
            .collect()
    }

    /// Transition `Editing → Saving` and hand out the write payload.
    /// Rejected when no session is open or a save is already in
    /// flight.
    pub fn begin_save(&mut self) -> Result<Vec<ReviewUpdate>, ReviewError> {
        match self.state {
            SessionState::Idle => Err(ReviewError::SessionClosed),
            SessionState::Saving => Err(ReviewError::SaveInFlight),
            SessionState::Editing => {
                self.state = SessionState::Saving;
                Ok(self.payload())
            }
        }
    }

    /// Report the outcome of the in-flight write. Success clears the
    /// overlay and closes the session; failure reopens the session
    /// with the overlay untouched so the caller can retry.
    pub fn complete_save(&mut self, success: bool) -> Result<(), ReviewError> {
        if self.state != SessionState::Saving {
            return Err(ReviewError::SessionClosed);
        }
        if success {
            self.pending.clear();
            self.state = SessionState::Idle;
        } else {
            self.state = SessionState::Editing;
        }
        Ok(())
    }

    /// Drive both save phases against a writer, for native callers.
    /// One batched write per invocation; a failure surfaces as
    /// `WriteFailed` and leaves the session open.
    pub fn save(&mut self, writer: &mut dyn ReviewWriter) -> Result<(), ReviewError> {
        let updates = self.begin_save()?;
        match writer.write_batch(&updates) {
            Ok(()) => {
                self.complete_save(true)?;
                Ok(())
            }
            Err(message) => {
                self.complete_save(false)?;
                log::warn!(
                    "review save of {} entries failed: {}",
                    updates.len(),
                    message
                );
                Err(ReviewError::WriteFailed(message))
            }
        }
    }
}

//! Review-flag edit session API
//!
//! The wasm side owns a single review session (the word-detail screen
//! shows one table at a time). Save is split-phase: `beginReviewSave`
//! hands the batched payload to JavaScript, the host performs the one
//! network write, and `completeReviewSave` reports the outcome. A
//! failed write leaves the session and its pending edits in place for
//! a retry; a second save while one is in flight is rejected.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::review::ReviewOverlay;
use crate::{wasm_info, wasm_log};

use super::helpers;

// WASM-owned review session (single table on screen at a time)
lazy_static! {
    static ref REVIEW_SESSION: Mutex<ReviewOverlay> = Mutex::new(ReviewOverlay::new());
}

/// Run a closure against the global review session
pub(crate) fn with_session<R>(f: impl FnOnce(&mut ReviewOverlay) -> R) -> R {
    let mut session = REVIEW_SESSION.lock().unwrap();
    f(&mut session)
}

/// Open an edit session for the current table
#[wasm_bindgen(js_name = beginReviewEdit)]
pub fn begin_review_edit() -> Result<(), JsValue> {
    with_session(|session| session.begin_edit()).map_err(helpers::session_error)?;
    wasm_info!("review edit session opened");
    Ok(())
}

/// Close the edit session, discarding all pending edits
#[wasm_bindgen(js_name = cancelReviewEdit)]
pub fn cancel_review_edit() -> Result<(), JsValue> {
    with_session(|session| session.cancel_edit()).map_err(helpers::session_error)?;
    wasm_info!("review edit session cancelled");
    Ok(())
}

/// Flip the pending review flag for a cell.
///
/// `word_id` is the `sourceId` of the cell as handed out by
/// `renderParadigmTable`; it arrives as a JS number and covers the
/// full id range the renderer emits. `base_value` is the stored flag
/// of the entry, as delivered in the table data. Returns the new
/// effective value, or `undefined` when no edit session is open (the
/// toggle is then a no-op).
#[wasm_bindgen(js_name = toggleReviewFlag)]
pub fn toggle_review_flag(word_id: f64, base_value: bool) -> Option<bool> {
    let word_id = word_id as i64;
    let flipped = with_session(|session| session.toggle(word_id, base_value));
    match flipped {
        Some(value) => wasm_log!("toggled review flag for word {}: {}", word_id, value),
        None => wasm_log!("ignored toggle for word {}: no edit session", word_id),
    }
    flipped
}

/// Start the batched save and return the write payload
/// `[{word_id, needs_review}, ...]` for the host to POST.
#[wasm_bindgen(js_name = beginReviewSave)]
pub fn begin_review_save() -> Result<JsValue, JsValue> {
    let updates = with_session(|session| session.begin_save()).map_err(helpers::session_error)?;
    wasm_info!(
        "review save started: {}",
        serde_json::to_string(&updates).unwrap_or_else(|_| "<unserializable>".to_string())
    );
    helpers::serialize(&updates, "Failed to serialize review payload")
}

/// Report the outcome of the in-flight batched write
#[wasm_bindgen(js_name = completeReviewSave)]
pub fn complete_review_save(success: bool) -> Result<(), JsValue> {
    with_session(|session| session.complete_save(success)).map_err(helpers::session_error)?;
    if success {
        wasm_info!("review save committed, session closed");
    } else {
        wasm_info!("review save failed, session kept open for retry");
    }
    Ok(())
}

/// Current session state: "idle", "editing", or "saving"
#[wasm_bindgen(js_name = reviewSessionState)]
pub fn review_session_state() -> String {
    let state = with_session(|session| session.state());
    match state {
        crate::review::SessionState::Idle => "idle",
        crate::review::SessionState::Editing => "editing",
        crate::review::SessionState::Saving => "saving",
    }
    .to_string()
}

//! WASM build test
//!
//! Exercises the JavaScript-facing API through the wasm-bindgen test
//! harness: render, edit session round trip, and the pronunciation
//! guide.

#![cfg(target_arch = "wasm32")]

use paradigm_wasm::api::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_table() -> wasm_bindgen::JsValue {
    let data = serde_json::json!({
        "table_type": 1,
        "table": {
            "noun": {
                "nom": {"sg": {"id": 1, "text": "kot", "needs_review": false}}
            }
        }
    });
    serde_wasm_bindgen::to_value(&data).unwrap()
}

#[wasm_bindgen_test]
fn test_render_paradigm_table() {
    let result = render_paradigm_table(sample_table());
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_review_session_round_trip() {
    assert_eq!(review_session_state(), "idle");

    begin_review_edit().unwrap();
    assert_eq!(review_session_state(), "editing");
    assert_eq!(toggle_review_flag(1.0, false), Some(true));

    let payload = begin_review_save();
    assert!(payload.is_ok());
    assert_eq!(review_session_state(), "saving");

    complete_review_save(true).unwrap();
    assert_eq!(review_session_state(), "idle");
}

#[wasm_bindgen_test]
fn test_toggle_without_session_is_ignored() {
    assert_eq!(toggle_review_flag(42.0, true), None);
}

#[wasm_bindgen_test]
fn test_pronunciation_guide() {
    let result = pronunciation_guide("pl", "ˈd͡ʑɛ̃kuj");
    assert!(result.is_ok());

    let tokens = tokenize_transcription("ˈd͡ʑɛ̃kuj");
    assert_eq!(tokens.length(), 5);
}

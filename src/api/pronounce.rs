//! Pronunciation guide API

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::pronounce::{build_guide, tokenize, PronunciationGuide};
use crate::wasm_log;

use super::helpers;

/// JS-facing shape of the pronunciation breakdown
#[derive(Serialize, Clone, Debug)]
struct GuideView {
    /// False when no pronunciation table exists for the language
    available: bool,
    entries: Vec<GuideEntryView>,
}

#[derive(Serialize, Clone, Debug)]
struct GuideEntryView {
    token: String,
    canonical: String,
    /// English equivalent, or the explicit no-match placeholder
    description: String,
}

/// Segment a phonetic transcription into grapheme tokens
#[wasm_bindgen(js_name = tokenizeTranscription)]
pub fn tokenize_transcription(transcription: &str) -> js_sys::Array {
    let tokens = tokenize(transcription);
    wasm_log!(
        "tokenized transcription of {} chars into {} token(s)",
        transcription.chars().count(),
        tokens.len()
    );

    let result = js_sys::Array::new();
    for token in tokens {
        result.push(&JsValue::from_str(&token));
    }
    result
}

/// Token-by-token pronunciation breakdown for a transcription.
///
/// An unsupported language yields `{available: false}`; a token with
/// no table entry yields a "no match found" description rather than an
/// error.
#[wasm_bindgen(js_name = pronunciationGuide)]
pub fn pronunciation_guide(language: &str, transcription: &str) -> Result<JsValue, JsValue> {
    let view = match build_guide(language, transcription) {
        PronunciationGuide::Unavailable => {
            wasm_log!("no pronunciation guide for language {:?}", language);
            GuideView {
                available: false,
                entries: Vec::new(),
            }
        }
        PronunciationGuide::Available(rows) => GuideView {
            available: true,
            entries: rows
                .into_iter()
                .map(|row| GuideEntryView {
                    description: row.description_text().to_string(),
                    token: row.token,
                    canonical: row.canonical,
                })
                .collect(),
        },
    };

    helpers::serialize(&view, "Failed to serialize pronunciation guide")
}

//! Language-scoped pronunciation lookup
//!
//! Resolves canonical tokens to english-equivalent descriptions. A
//! missing language table and a missing token entry are distinct
//! states: the first yields an unavailable guide, the second an
//! explicit per-token "no match found" row. Neither is an error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::normalize::normalize;
use super::tokenizer::tokenize;

/// Placeholder shown for tokens with no entry in the language table
pub const NO_MATCH_MARKER: &str = "no match found";

static PRONUNCIATION_MAP: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let polish = HashMap::from([
            // Vowels
            ("a", "'a' as in 'father'"),
            ("ɛ", "'e' as in 'bed'"),
            ("i", "'ee' as in 'see'"),
            ("ɨ", "'y' as in 'myth', but further back"),
            ("ɔ", "'o' as in 'born', but short"),
            ("u", "'oo' as in 'boot'"),
            ("ɛ̃", "nasal 'e', like 'en' in French 'bien'"),
            ("ɔ̃", "nasal 'o', like 'on' in French 'bon'"),
            // Stops
            ("p", "'p' as in 'spin'"),
            ("b", "'b' as in 'bed'"),
            ("t", "'t' as in 'stop'"),
            ("d", "'d' as in 'dog'"),
            ("k", "'k' as in 'skin'"),
            ("ɡ", "'g' as in 'go'"),
            // Fricatives
            ("f", "'f' as in 'fun'"),
            ("v", "'v' as in 'vine'"),
            ("s", "'s' as in 'sun'"),
            ("z", "'z' as in 'zoo'"),
            ("ʂ", "'sh' as in 'shut', tongue curled back"),
            ("ʐ", "'s' as in 'pleasure', tongue curled back"),
            ("ɕ", "soft 'sh', tongue toward the palate"),
            ("ʑ", "soft 'zh', tongue toward the palate"),
            ("x", "'h' as in 'loch'"),
            // Affricates
            ("t͡s", "'ts' as in 'cats'"),
            ("d͡z", "'ds' as in 'pads'"),
            ("t͡ʂ", "'ch' as in 'church', tongue curled back"),
            ("d͡ʐ", "'j' as in 'jam', tongue curled back"),
            ("t͡ɕ", "soft 'ch', tongue toward the palate"),
            ("d͡ʑ", "soft 'j', tongue toward the palate"),
            // Sonorants
            ("m", "'m' as in 'man'"),
            ("n", "'n' as in 'net'"),
            ("ɲ", "'ny' as in 'canyon'"),
            ("l", "'l' as in 'lip'"),
            ("r", "rolled 'r', as in Spanish 'perro'"),
            ("w", "'w' as in 'wet'"),
            ("j", "'y' as in 'yes'"),
        ]);

        HashMap::from([("pl", polish)])
    });

/// One row of the token-by-token breakdown
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PronunciationRow {
    /// Token as segmented from the transcription
    pub token: String,

    /// Canonical lookup key the token normalized to
    pub canonical: String,

    /// English equivalent; `None` when the language table has no entry
    pub description: Option<String>,
}

impl PronunciationRow {
    /// Description text with the explicit no-match placeholder
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_MATCH_MARKER)
    }
}

/// Result of building a pronunciation guide
#[derive(Clone, Debug, PartialEq)]
pub enum PronunciationGuide {
    /// No pronunciation table exists for the requested language
    Unavailable,

    /// Token-by-token breakdown, one row per segmented token
    Available(Vec<PronunciationRow>),
}

/// Whether a pronunciation table exists for `language`
pub fn language_supported(language: &str) -> bool {
    PRONUNCIATION_MAP.contains_key(language)
}

/// Build the token-by-token guide for a transcription.
///
/// Pure and stateless; recomputed per call.
pub fn build_guide(language: &str, transcription: &str) -> PronunciationGuide {
    let table = match PRONUNCIATION_MAP.get(language) {
        Some(table) => table,
        None => return PronunciationGuide::Unavailable,
    };

    let rows = tokenize(transcription)
        .into_iter()
        .map(|token| {
            let canonical = normalize(&token).to_string();
            let description = table.get(canonical.as_str()).map(|d| d.to_string());
            PronunciationRow {
                token,
                canonical,
                description,
            }
        })
        .collect();

    PronunciationGuide::Available(rows)
}

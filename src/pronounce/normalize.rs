//! Token canonicalization
//!
//! Maps rare or marked token spellings onto the canonical tokens the
//! pronunciation tables are keyed by: devoiced sonorants lose their
//! ring, palatalized and dental consonants collapse to the base
//! consonant, positional allophones fold into their phoneme. Unmapped
//! tokens pass through unchanged.
//!
//! Every map value is itself canonical, so normalization is
//! idempotent: `normalize(normalize(t)) == normalize(t)`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static NORMALIZATION_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Devoiced sonorants (combining ring below)
        ("m\u{0325}", "m"),
        ("n\u{0325}", "n"),
        ("r\u{0325}", "r"),
        ("l\u{0325}", "l"),
        ("j\u{0325}", "j"),
        ("w\u{0325}", "w"),
        // Palatalized consonants collapse to the base consonant
        ("mʲ", "m"),
        ("pʲ", "p"),
        ("bʲ", "b"),
        ("fʲ", "f"),
        ("vʲ", "v"),
        ("kʲ", "k"),
        ("ɡʲ", "ɡ"),
        ("xʲ", "x"),
        // Dental diacritic (combining bridge below)
        ("t\u{032A}", "t"),
        ("d\u{032A}", "d"),
        ("n\u{032A}", "n"),
        // Positional allophones
        ("ɱ", "m"),
        ("ŋ", "n"),
        ("ɫ", "w"),
        // Length marks on vowels
        ("aː", "a"),
        ("ɛː", "ɛ"),
        ("iː", "i"),
        ("ɔː", "ɔ"),
        ("uː", "u"),
    ])
});

/// Canonical lookup key for a token; unmapped tokens pass through.
pub fn normalize(token: &str) -> &str {
    NORMALIZATION_MAP.get(token).copied().unwrap_or(token)
}

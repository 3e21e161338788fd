//! Pronunciation guide core
//!
//! This module segments phonetic transcriptions into grapheme tokens,
//! canonicalizes rare token spellings, and resolves tokens to
//! human-readable descriptions per target language. Everything here is
//! pure and stateless; the lookup tables are immutable process-wide
//! data.

pub mod normalize;
pub mod resolver;
pub mod tokenizer;

pub use normalize::normalize;
pub use resolver::{build_guide, language_supported, PronunciationGuide, PronunciationRow};
pub use tokenizer::tokenize;

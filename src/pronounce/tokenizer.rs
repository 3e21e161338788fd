//! Phonetic transcription tokenizer
//!
//! Segments a raw transcription string into grapheme tokens in one
//! greedy left-to-right pass. A token is a base character plus its
//! combining marks and at most one trailing modifier letter, a
//! tie-barred ligature of two base characters (affricates), or a
//! two-base cluster closed by the non-syllabic mark (diphthongs).
//! Stress marks and spacing tie punctuation are stripped up front and
//! never appear in tokens.

/// Primary stress, U+02C8
const STRESS_PRIMARY: char = '\u{02C8}';
/// Secondary stress, U+02CC
const STRESS_SECONDARY: char = '\u{02CC}';
/// Undertie linking mark, U+203F
const UNDERTIE: char = '\u{203F}';
/// Character tie, U+2040
const CHARACTER_TIE: char = '\u{2040}';

/// Combining double inverted breve (tie bar above), U+0361
const TIE_BAR_ABOVE: char = '\u{0361}';
/// Combining double breve below (tie bar below), U+035C
const TIE_BAR_BELOW: char = '\u{035C}';
/// Combining inverted breve below (non-syllabic mark), U+032F
const NON_SYLLABIC: char = '\u{032F}';

/// Marks removed before segmentation
fn is_stripped_mark(c: char) -> bool {
    matches!(c, STRESS_PRIMARY | STRESS_SECONDARY | UNDERTIE | CHARACTER_TIE)
}

/// Tie bars joining two base characters into one affricate token
fn is_tie_bar(c: char) -> bool {
    matches!(c, TIE_BAR_ABOVE | TIE_BAR_BELOW)
}

/// Combining marks that attach to the preceding base character.
/// Covers the combining-diacritics blocks transcriptions draw from.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
    )
}

/// Spacing modifier letters (aspiration, palatalization, length, ...)
/// that close a token. Stress marks sit in the same block but are
/// stripped before segmentation.
fn is_modifier_letter(c: char) -> bool {
    matches!(
        c,
        '\u{02B0}'..='\u{02FF}' | '\u{1D2C}'..='\u{1D6A}' | '\u{207F}'
    )
}

/// Segment a transcription into grapheme tokens.
///
/// A single pass produces the complete ordered sequence; identical
/// input always yields identical output.
pub fn tokenize(transcription: &str) -> Vec<String> {
    let chars: Vec<char> = transcription
        .chars()
        .filter(|c| !is_stripped_mark(*c))
        .collect();

    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        // Affricate ligature: base + tie bar + base
        if i + 2 < chars.len() && is_tie_bar(chars[i + 1]) {
            tokens.push(chars[i..i + 3].iter().collect());
            i += 3;
            continue;
        }

        // Non-syllabic cluster: the mark two positions ahead binds all
        // three characters into one token
        if i + 2 < chars.len() && chars[i + 2] == NON_SYLLABIC {
            tokens.push(chars[i..i + 3].iter().collect());
            i += 3;
            continue;
        }

        let mut token = String::new();
        token.push(chars[i]);
        i += 1;

        while i < chars.len() && is_combining_mark(chars[i]) {
            token.push(chars[i]);
            i += 1;
        }

        if i < chars.len() && is_modifier_letter(chars[i]) {
            token.push(chars[i]);
            i += 1;
        }

        tokens.push(token);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_stress_and_splits_affricate() {
        let tokens = tokenize("ˈd͡ʑɛ̃kuj");
        assert_eq!(tokens, ["d͡ʑ", "ɛ̃", "k", "u", "j"]);
        // The affricate is one three-character token
        assert_eq!(tokens[0].chars().count(), 3);
    }

    #[test]
    fn test_tie_bar_below_also_ligates() {
        assert_eq!(tokenize("t͜sa"), ["t͜s", "a"]);
    }

    #[test]
    fn test_non_syllabic_binds_diphthong() {
        assert_eq!(tokenize("au̯to"), ["au̯", "t", "o"]);
    }

    #[test]
    fn test_combining_marks_then_modifier_letter() {
        // ɛ + combining tilde, then a palatalized consonant
        assert_eq!(tokenize("mʲɛ̃"), ["mʲ", "ɛ̃"]);
        // Length mark closes the vowel token
        assert_eq!(tokenize("aːb"), ["aː", "b"]);
    }

    #[test]
    fn test_secondary_stress_and_undertie_are_stripped() {
        assert_eq!(tokenize("ˌna‿ˈvɛt"), ["n", "a", "v", "ɛ", "t"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("ˈˌ").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = "ˈd͡ʑɛ̃kuj‿ɛ";
        assert_eq!(tokenize(input), tokenize(input));
    }

    #[test]
    fn test_trailing_tie_bar_stays_with_base() {
        // Malformed input: tie bar with no second base character
        assert_eq!(tokenize("d͡"), ["d͡"]);
    }
}

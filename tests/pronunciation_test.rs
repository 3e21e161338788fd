//! Tokenizer, normalization, and pronunciation guide tests

use paradigm_wasm::pronounce::{
    build_guide, language_supported, normalize, tokenize, PronunciationGuide,
};

fn rows(guide: PronunciationGuide) -> Vec<paradigm_wasm::pronounce::PronunciationRow> {
    match guide {
        PronunciationGuide::Available(rows) => rows,
        PronunciationGuide::Unavailable => panic!("guide should be available"),
    }
}

#[test]
fn tokenizer_splits_affricates_and_strips_stress() {
    let tokens = tokenize("ˈd͡ʑɛ̃kuj");
    assert_eq!(tokens, ["d͡ʑ", "ɛ̃", "k", "u", "j"]);

    // The affricate ligature is base + tie bar + base
    let affricate: Vec<char> = tokens[0].chars().collect();
    assert_eq!(affricate.len(), 3);
    assert_eq!(affricate[1], '\u{0361}');
}

#[test]
fn tokenizer_is_deterministic() {
    let input = "ˌza‿ˈt͡ʂɨm au̯ˈto ɡʲɛ";
    let first = tokenize(input);
    for _ in 0..10 {
        assert_eq!(tokenize(input), first);
    }
}

#[test]
fn tokenizer_handles_modifier_letters_and_clusters() {
    assert_eq!(tokenize("pʲɔ"), ["pʲ", "ɔ"]);
    assert_eq!(tokenize("au̯"), ["au̯"]);
    assert_eq!(tokenize("t͜ɕi"), ["t͜ɕ", "i"]);
}

#[test]
fn normalization_is_idempotent() {
    for token in ["mʲ", "ŋ", "ɫ", "m\u{0325}", "t͡ɕ", "a", "ʑ", "xyz"] {
        assert_eq!(normalize(normalize(token)), normalize(token));
    }
}

#[test]
fn unsupported_language_reports_unavailable() {
    assert!(!language_supported("de"));
    assert_eq!(build_guide("de", "haʊs"), PronunciationGuide::Unavailable);
}

#[test]
fn unknown_token_gets_no_match_placeholder() {
    let breakdown = rows(build_guide("pl", "aθ"));
    assert_eq!(breakdown.len(), 2);
    assert!(breakdown[0].description.is_some());
    assert_eq!(breakdown[1].description, None);
    assert_eq!(breakdown[1].description_text(), "no match found");
}

#[test]
fn guide_resolves_variants_through_normalization() {
    // ŋ is an allophone of n; the guide resolves it via the n entry
    let breakdown = rows(build_guide("pl", "baŋk"));
    let velar = breakdown.iter().find(|r| r.token == "ŋ").unwrap();
    assert_eq!(velar.canonical, "n");
    assert!(velar.description.is_some());
}

#[test]
fn full_word_resolves_every_token() {
    let breakdown = rows(build_guide("pl", "ˈd͡ʑɛ̃kuj"));
    assert_eq!(breakdown.len(), 5);
    for row in &breakdown {
        assert!(
            row.description.is_some(),
            "token {:?} should resolve",
            row.token
        );
    }
}

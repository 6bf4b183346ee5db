//! Property-based tests for the tokenizer.
//!
//! Random strings are drawn from an alphabet of Arabic letters, the marks the
//! rules care about and spaces, so that most rules get a chance to fire. The
//! properties hold for any input:
//! 1. Coverage: tokens are contiguous, start at 0, end at the input length and
//!    concatenate back to the input.
//! 2. Determinism: the same input always yields the same tokens.
//! 3. Gating: skipping rules by trigger characters never changes the output.
//! 4. Termination: heavy mutual overlap with a tiny pass cap still yields a
//!    valid partition.

use proptest::prelude::*;
use tajweed::{Hit, Options, Rule, RuleLibrary, RuleName, Span, Token, default_library, tokenize, tokenize_with};

const ALPHABET: &[char] = &[
    ' ', ' ', '\u{0627}', '\u{0671}', '\u{0621}', '\u{0623}', '\u{0628}', '\u{062A}', '\u{062C}', '\u{062D}',
    '\u{062F}', '\u{0631}', '\u{0633}', '\u{0637}', '\u{0639}', '\u{0642}', '\u{0643}', '\u{0644}', '\u{0645}',
    '\u{0646}', '\u{0647}', '\u{0648}', '\u{064A}', '\u{064B}', '\u{064C}', '\u{064E}', '\u{064F}', '\u{0650}',
    '\u{0651}', '\u{0652}', '\u{0670}', '\u{06D6}', '\u{06E1}', '\u{06E2}', '\u{06E4}', '\u{06E5}', '\u{06E7}',
    '\u{0640}', '\u{200A}', '\u{2060}',
];

fn ayah_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..48).prop_map(|chars| chars.into_iter().collect())
}

fn assert_partition(input: &str, tokens: &[Token]) {
    assert!(!tokens.is_empty(), "no tokens for {input:?}");
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[tokens.len() - 1].end, input.len());
    for pair in tokens.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "gap or overlap in {tokens:?}");
    }
    for t in tokens {
        let span = t.span();
        assert_eq!(t.text, &input[span.start..span.end]);
        if !input.is_empty() {
            assert!(!span.is_empty(), "empty token {t:?}");
        }
    }
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, input);
}

proptest! {
    #[test]
    fn tokens_partition_the_input(input in ayah_strategy()) {
        assert_partition(&input, &tokenize(&input));
    }

    #[test]
    fn untagged_tokens_are_never_adjacent(input in ayah_strategy()) {
        let tokens = tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].is_tagged() || pair[1].is_tagged());
        }
    }

    #[test]
    fn tokenizing_is_deterministic(input in ayah_strategy()) {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn gating_is_sound(input in ayah_strategy()) {
        let ungated = Options { gate_rules: false, ..Options::default() };
        prop_assert_eq!(
            tokenize_with(&input, default_library(), &Options::default()),
            tokenize_with(&input, default_library(), &ungated)
        );
    }

    #[test]
    fn utf16_offsets_are_monotonic(input in ayah_strategy()) {
        let tokens = tokenize(&input);
        let mut last = 0;
        for t in &tokens {
            let (start, end) = t.utf16_span(&input);
            prop_assert_eq!(start, last);
            prop_assert!(end >= start);
            last = end;
        }
        prop_assert_eq!(last, input.encode_utf16().count());
    }
}

// -- Adversarial overlap --

/// Tags every pair of neighbouring characters while advancing one character,
/// so each candidate overlaps the next.
fn overlapping_pairs(text: &str, pos: usize) -> Option<Hit> {
    let mut chars = text.get(pos..)?.chars();
    let first = chars.next()?.len_utf8();
    let second = chars.next()?.len_utf8();
    Some(Hit { whole: Span::new(pos, pos + first), tagged: Span::new(pos, pos + first + second) })
}

fn overlap_library() -> RuleLibrary {
    RuleLibrary::new(vec![
        Rule::scanner(RuleName::Ghunna, "pairs", overlapping_pairs),
        Rule::scanner(RuleName::Qalqala, "pairs_strong", overlapping_pairs).with_priority(3),
    ])
}

#[test]
fn full_resolution_of_a_long_overlap_chain() {
    let library = RuleLibrary::new(vec![Rule::scanner(RuleName::Ghunna, "pairs", overlapping_pairs)]);
    let input = "a".repeat(50);
    let res = tajweed::tokenize_verbose_with(&input, &library, &Options::default());

    assert!(!res.details.capped);
    assert_eq!(res.details.raw_candidates, 49);
    // equal priorities: the later of each overlapping pair goes, from the end
    assert_eq!(res.tokens.len(), 2);
    assert_eq!((res.tokens[0].rule, res.tokens[0].start, res.tokens[0].end), (RuleName::Ghunna, 0, 2));
    assert_partition(&input, &res.tokens);
}

#[test]
fn pass_cap_yields_a_partial_but_valid_result() {
    let options = Options { max_resolution_passes: 3, ..Options::default() };
    let input = "a".repeat(64);
    let res = tajweed::tokenize_verbose_with(&input, &overlap_library(), &options);

    assert!(res.details.capped);
    assert_eq!(res.details.passes, 3);
    assert!(res.details.resolved.windows(2).all(|w| w[0].end <= w[1].start));
    assert_partition(&input, &res.tokens);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolution_terminates_under_any_cap(len in 0usize..200, cap in 1usize..20) {
        let options = Options { max_resolution_passes: cap, ..Options::default() };
        let input = "\u{0628}a".repeat(len / 2);
        let tokens = tokenize_with(&input, &overlap_library(), &options);
        assert_partition(&input, &tokens);
    }
}

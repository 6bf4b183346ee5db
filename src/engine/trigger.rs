//! Trigger scanning (input pre-classification).
//!
//! A single pass over the input records which coarse character classes occur
//! (`BucketMask`). The tokenizer then skips every rule whose declared buckets
//! are disjoint from the input's, which on short ayahs removes most of the
//! library before any regex runs.
//!
//! ## Soundness
//!
//! Gating is only correct if every possible match of a rule contains at least
//! one character from one of its buckets. Rules are declared with that in
//! mind (see `src/rules/`); the `gating_never_changes_output` test checks it
//! against a corpus of ayahs. Set `Options::gate_rules = false` to bypass.

use super::library::BucketMask;

/// Input characteristics detected from the raw input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let buckets = input.chars().fold(BucketMask::empty(), |acc, c| acc | bucket_of(c));
        TriggerInfo { buckets }
    }

    /// Whether a rule declaring `required` may match this input.
    pub fn admits(&self, required: BucketMask) -> bool {
        required.is_empty() || required.intersects(self.buckets)
    }
}

fn bucket_of(c: char) -> BucketMask {
    match c {
        '\u{0646}' => BucketMask::NOON,
        '\u{0645}' => BucketMask::MEEM,
        '\u{064B}'..='\u{064D}' | '\u{08F0}'..='\u{08F2}' => BucketMask::TANWIN,
        '\u{0651}' => BucketMask::SHADDA,
        '\u{0644}' => BucketMask::LAM,
        '\u{0642}' | '\u{0637}' | '\u{0628}' | '\u{062C}' | '\u{062F}' => BucketMask::QALQALA,
        '\u{0627}' | '\u{0622}' | '\u{0648}' | '\u{064A}' | '\u{0670}' | '\u{06CC}' | '\u{06E5}'..='\u{06E7}' => {
            BucketMask::MADD
        }
        '\u{06E2}' | '\u{06ED}' => BucketMask::SMALL_MEEM,
        '\u{0671}' => BucketMask::ALEF_WASLA,
        _ => BucketMask::empty(),
    }
}

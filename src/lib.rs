//! Tajweed tokenizer for Quranic Arabic text.
//!
//! The crate partitions an ayah into contiguous spans, each labeled with at
//! most one recitation rule (or `none`):
//!
//! ```text
//! rules (library) ──▶ trigger scan ──▶ match every rule ──▶ dedup
//!                                                           │
//!              tokens ◀── assemble (fill gaps) ◀── resolve overlaps
//! ```
//!
//! Offsets are UTF-8 byte offsets into the input; see [`Token::utf16_span`]
//! for JavaScript-style offsets.

use serde::{Deserialize, Serialize};
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod cache;
mod engine;
mod error;
mod legend;
mod rules;

pub use api::{
    DEFAULT_MAX_RESOLUTION_PASSES, Options, TokenizeDetails, TokenizeVerbose, default_library, tokenize,
    tokenize_batch, tokenize_verbose_with, tokenize_with,
};
pub use cache::TokenCache;
pub use engine::{BucketMask, CompiledRule, RuleLibrary};
pub use error::RuleError;
pub use legend::RuleSet;
pub use rules::default_rules;

// --- Rule names ---------------------------------------------------------------

/// Name of a recitation rule, or `none` for untagged filler.
///
/// The serialized form (and `Display`) is the conventional rule identifier,
/// e.g. `"LAFZATULLAH"`, `"idghamWithGhunna"`, `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleName {
    #[serde(rename = "LAFZATULLAH")]
    Lafzatullah,
    #[serde(rename = "izhar")]
    Izhar,
    #[serde(rename = "ikhfaa")]
    Ikhfaa,
    #[serde(rename = "idghamWithGhunna")]
    IdghamWithGhunna,
    #[serde(rename = "iqlab")]
    Iqlab,
    #[serde(rename = "qalqala")]
    Qalqala,
    #[serde(rename = "idghamWithoutGhunna")]
    IdghamWithoutGhunna,
    #[serde(rename = "ghunna")]
    Ghunna,
    #[serde(rename = "prolonging")]
    Prolonging,
    #[serde(rename = "alefTafreeq")]
    AlefTafreeq,
    #[serde(rename = "hamzatulWasli")]
    HamzatulWasli,
    #[serde(rename = "none")]
    None,
}

impl RuleName {
    /// Every real rule, strongest first. `RuleName::None` is not included.
    pub const ALL: [RuleName; 11] = [
        RuleName::Lafzatullah,
        RuleName::Izhar,
        RuleName::Ikhfaa,
        RuleName::IdghamWithGhunna,
        RuleName::Iqlab,
        RuleName::Qalqala,
        RuleName::IdghamWithoutGhunna,
        RuleName::Ghunna,
        RuleName::Prolonging,
        RuleName::AlefTafreeq,
        RuleName::HamzatulWasli,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::Lafzatullah => "LAFZATULLAH",
            RuleName::Izhar => "izhar",
            RuleName::Ikhfaa => "ikhfaa",
            RuleName::IdghamWithGhunna => "idghamWithGhunna",
            RuleName::Iqlab => "iqlab",
            RuleName::Qalqala => "qalqala",
            RuleName::IdghamWithoutGhunna => "idghamWithoutGhunna",
            RuleName::Ghunna => "ghunna",
            RuleName::Prolonging => "prolonging",
            RuleName::AlefTafreeq => "alefTafreeq",
            RuleName::HamzatulWasli => "hamzatulWasli",
            RuleName::None => "none",
        }
    }

    /// Default priority; lower is stronger. `none` is weaker than every rule.
    pub fn default_priority(self) -> u16 {
        match self {
            RuleName::Lafzatullah => 1,
            RuleName::Izhar => 2,
            RuleName::Ikhfaa => 3,
            RuleName::IdghamWithGhunna => 4,
            RuleName::Iqlab => 5,
            RuleName::Qalqala => 6,
            RuleName::IdghamWithoutGhunna => 7,
            RuleName::Ghunna => 8,
            RuleName::Prolonging => 9,
            RuleName::AlefTafreeq => 10,
            RuleName::HamzatulWasli => 11,
            RuleName::None => 100,
        }
    }

    pub fn is_none(self) -> bool {
        self == RuleName::None
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Spans and rules ------------------------------------------------------------

/// Half-open byte range `[start, end)` into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Result of a hand-written scanner: the whole contextual match and the
/// sub-range that is actually tagged.
///
/// ```text
///   ـَا  ب
///   ^^^^^    whole   (fatha + alef, consumed by the scan)
///     ^^     tagged  (alef only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub whole: Span,
    pub tagged: Span,
}

/// A scanner tries to match at exactly `position` of `text`.
pub type ScanFn = fn(text: &str, position: usize) -> Option<Hit>;

/// How a rule finds its matches.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// A `regex` pattern. Every named capture group that participates in a
    /// match designates a tagged range; everything else is context.
    Pattern(&'static str),
    /// A hand-written scanner, for conditions that need backreferences or
    /// lookahead.
    Scan(ScanFn),
}

/// A rule definition: parent rule name, sub-case label, priority and matcher.
///
/// `buckets` lists the coarse character classes of which at least one must
/// occur in the input for the rule to possibly match (empty = always run).
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: RuleName,
    pub label: &'static str,
    pub priority: u16,
    pub matcher: Matcher,
    pub buckets: BucketMask,
}

impl Rule {
    /// A regex-backed rule with the rule's default priority.
    pub fn pattern(name: RuleName, label: &'static str, source: &'static str) -> Self {
        Rule {
            name,
            label,
            priority: name.default_priority(),
            matcher: Matcher::Pattern(source),
            buckets: BucketMask::empty(),
        }
    }

    /// A scanner-backed rule with the rule's default priority.
    pub fn scanner(name: RuleName, label: &'static str, scan: ScanFn) -> Self {
        Rule { name, label, priority: name.default_priority(), matcher: Matcher::Scan(scan), buckets: BucketMask::empty() }
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_buckets(mut self, buckets: BucketMask) -> Self {
        self.buckets = buckets;
        self
    }
}

// --- Candidates and tokens -------------------------------------------------------

/// A tagged range proposed by one rule, before overlap resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub rule: RuleName,
    /// Sub-case that produced the candidate (e.g. `"idghamWithoutGhunna_misleyn"`).
    pub label: &'static str,
    pub priority: u16,
    pub start: usize,
    pub end: usize,
}

/// One labeled span of the output stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub rule: RuleName,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Token {
    pub(crate) fn new(input: &str, rule: RuleName, start: usize, end: usize) -> Self {
        Token { rule, start, end, text: input[start..end].to_string() }
    }

    pub fn is_tagged(&self) -> bool {
        !self.rule.is_none()
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// The token's `(start, end)` in UTF-16 code units of `input`, the offset
    /// convention of JavaScript strings.
    ///
    /// `input` must be the text this token was produced from.
    pub fn utf16_span(&self, input: &str) -> (usize, usize) {
        let start = input.get(..self.start).map(|s| s.encode_utf16().count()).unwrap_or(0);
        (start, start + self.text.encode_utf16().count())
    }
}

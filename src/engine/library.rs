//! Rule compilation and the immutable rule library.
//!
//! This is the *static* side of the engine. A `RuleLibrary` is built once from
//! a list of `Rule`s and then shared (it is `Send + Sync`) by every tokenize
//! call:
//!
//! 1. **Compile** each rule on its own: regex patterns go through
//!    `Regex::new`, scanners are taken as-is.
//! 2. **Reject** rules that fail: an invalid pattern, or a pattern without a
//!    named capture (nothing to tag). A rejected rule is logged, kept in
//!    `rejected`, and left out of the active set. Construction itself never
//!    fails; a library with no usable rules tags everything `none`.
//!
//! ## Invariants
//!
//! - `rules` keeps the declaration order of the accepted rules. The resolver's
//!   tie-break for equal start and equal priority depends on this order.
//! - Nothing here is mutated after `new` returns.

use crate::{Matcher, Rule, RuleError, ScanFn};
use regex::Regex;

bitflags::bitflags! {
    /// Coarse character classes used to skip rules that cannot match.
    ///
    /// A rule declares the classes of which at least one must be present in
    /// the input; `TriggerInfo::scan` computes which classes the input has.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// ن
        const NOON       = 1 << 0;
        /// م
        const MEEM       = 1 << 1;
        /// Tanwin marks, including the open forms U+08F0..U+08F2.
        const TANWIN     = 1 << 2;
        const SHADDA     = 1 << 3;
        /// ل
        const LAM        = 1 << 4;
        /// The echo letters ق ط ب ج د.
        const QALQALA    = 1 << 5;
        /// Long-vowel carriers: alef, alef madda, waw, ya and their small forms,
        /// plus the superscript alef.
        const MADD       = 1 << 6;
        /// Small high/low meem (iqlab marker).
        const SMALL_MEEM = 1 << 7;
        /// ٱ
        const ALEF_WASLA = 1 << 8;
    }
}

/// Rule identifier (index into `RuleLibrary::rules`).
pub(crate) type RuleId = usize;

/// Executable form of a rule's matcher.
#[derive(Debug)]
pub(crate) enum CompiledMatcher {
    /// Compiled regex plus the indices of its named capture groups.
    Regex { regex: Regex, groups: Vec<usize> },
    Scan(ScanFn),
}

/// A rule that compiled successfully.
#[derive(Debug)]
pub struct CompiledRule {
    pub(crate) rule: Rule,
    pub(crate) matcher: CompiledMatcher,
}

impl CompiledRule {
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    fn compile(rule: Rule) -> Result<Self, RuleError> {
        let matcher = match rule.matcher {
            Matcher::Pattern(source) => {
                let regex = Regex::new(source).map_err(|source| RuleError::InvalidPattern { label: rule.label, source })?;
                let groups: Vec<usize> =
                    regex.capture_names().enumerate().filter_map(|(idx, name)| name.map(|_| idx)).collect();
                if groups.is_empty() {
                    return Err(RuleError::MissingCapture { label: rule.label });
                }
                CompiledMatcher::Regex { regex, groups }
            }
            Matcher::Scan(scan) => CompiledMatcher::Scan(scan),
        };
        Ok(CompiledRule { rule, matcher })
    }
}

/// The active, read-only set of compiled rules.
#[derive(Debug)]
pub struct RuleLibrary {
    rules: Vec<CompiledRule>,
    rejected: Vec<RuleError>,
}

impl RuleLibrary {
    /// Compile `rules`, keeping the ones that compile and recording the rest.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut rejected = Vec::new();

        for rule in rules {
            match CompiledRule::compile(rule) {
                Ok(c) => compiled.push(c),
                Err(err) => {
                    tracing::warn!(rule = err.label(), error = %err, "rule excluded from library");
                    rejected.push(err);
                }
            }
        }

        tracing::debug!(active = compiled.len(), rejected = rejected.len(), "rule library built");
        RuleLibrary { rules: compiled, rejected }
    }

    /// A library with no rules; everything tokenizes as `none`.
    pub fn empty() -> Self {
        RuleLibrary { rules: Vec::new(), rejected: Vec::new() }
    }

    /// Accepted rules in declaration order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Errors for rules that were left out.
    pub fn rejected(&self) -> &[RuleError] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn get(&self, id: RuleId) -> &CompiledRule {
        &self.rules[id]
    }
}

impl Default for RuleLibrary {
    /// The built-in tajweed catalogue.
    fn default() -> Self {
        RuleLibrary::new(crate::rules::default_rules())
    }
}

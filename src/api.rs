use crate::engine::{self, RuleLibrary};
use crate::{Candidate, Token};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use std::time::Duration;

static DEFAULT_LIBRARY: Lazy<RuleLibrary> = Lazy::new(RuleLibrary::default);

/// Upper bound on overlap-resolution passes per input.
pub const DEFAULT_MAX_RESOLUTION_PASSES: usize = 1000;

/// Options that affect matching and resolution.
#[derive(Debug, Clone)]
pub struct Options {
    /// Resolution passes allowed before falling back to a greedy sweep.
    pub max_resolution_passes: usize,
    /// Skip rules whose trigger characters do not occur in the input. Turning
    /// this off never changes the output, only the amount of work.
    pub gate_rules: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { max_resolution_passes: DEFAULT_MAX_RESOLUTION_PASSES, gate_rules: true }
    }
}

/// The built-in rule library, compiled on first use and shared afterwards.
pub fn default_library() -> &'static RuleLibrary {
    &DEFAULT_LIBRARY
}

/// Additional details returned by [`tokenize_verbose_with`].
///
/// Meant for debugging rules and for profiling; the plain [`tokenize_with`]
/// path does not keep any of it.
#[derive(Debug, Clone)]
pub struct TokenizeDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent running matchers.
    pub matching: Duration,
    /// Time spent deduplicating and resolving overlaps.
    pub resolve: Duration,
    /// Time spent filling gaps.
    pub assemble: Duration,
    /// Labels of the rules that ran on this input.
    pub active_rules: Vec<String>,
    /// Whole matches per active rule label, in library order.
    pub matches_per_rule: Vec<(String, usize)>,
    /// Candidates before deduplication.
    pub raw_candidates: usize,
    /// Candidates that survived resolution, ascending by start.
    pub resolved: Vec<Candidate>,
    /// Resolution passes performed.
    pub passes: usize,
    /// Whether resolution stopped at the pass cap.
    pub capped: bool,
}

/// Result from [`tokenize_verbose_with`].
#[derive(Debug, Clone)]
pub struct TokenizeVerbose {
    pub text: String,
    pub tokens: Vec<Token>,
    pub elapsed: Duration,
    pub details: TokenizeDetails,
}

/// Tokenize `text` with the built-in rules and default options.
///
/// # Example
/// ```
/// use tajweed::{RuleName, tokenize};
///
/// let tokens = tokenize("\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650}");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].rule, RuleName::Lafzatullah);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with(text, default_library(), &Options::default())
}

/// Tokenize `text` with a specific library and options.
pub fn tokenize_with(text: &str, library: &RuleLibrary, options: &Options) -> Vec<Token> {
    engine::Tokenizer::new(text, library, options).run(options)
}

/// Tokenize `text` and return stage timings and resolution details alongside
/// the tokens.
pub fn tokenize_verbose_with(text: &str, library: &RuleLibrary, options: &Options) -> TokenizeVerbose {
    let tokenizer = engine::Tokenizer::new(text, library, options);
    let active_rules = tokenizer.active_rule_labels().into_iter().map(|s| s.to_string()).collect();

    let run = tokenizer.run_with_metrics(options);

    let details = TokenizeDetails {
        total: run.metrics.total,
        matching: run.metrics.matching,
        resolve: run.metrics.resolve,
        assemble: run.metrics.assemble,
        active_rules,
        matches_per_rule: run.metrics.matches_per_rule.iter().map(|&(label, n)| (label.to_string(), n)).collect(),
        raw_candidates: run.metrics.raw_candidates,
        resolved: run.resolution.kept,
        passes: run.resolution.passes,
        capped: run.resolution.capped,
    };

    TokenizeVerbose { text: text.to_string(), tokens: run.tokens, elapsed: run.metrics.total, details }
}

/// Tokenize many texts in parallel against one shared library.
///
/// The output is in input order and identical to calling [`tokenize_with`] on
/// each text in turn.
pub fn tokenize_batch<S>(texts: &[S], library: &RuleLibrary, options: &Options) -> Vec<Vec<Token>>
where
    S: AsRef<str> + Sync,
{
    texts.par_iter().map(|text| tokenize_with(text.as_ref(), library, options)).collect()
}

//! Tokenizer run metrics.
//!
//! - `Tokenizer::run` for normal operation.
//! - `Tokenizer::run_with_metrics` for profiling and for inspecting what each
//!   stage produced (raw candidate count, resolved candidates, passes).
//!
//! Timings are wall-clock `Instant` measurements and only meaningful for
//! relative comparisons between stages.

use super::resolve::ResolveOutcome;
use crate::Token;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for `Tokenizer::run_with_metrics`.
    pub total: Duration,
    /// Time spent running matchers.
    pub matching: Duration,
    /// Time spent deduplicating and resolving overlaps.
    pub resolve: Duration,
    /// Time spent assembling the token stream.
    pub assemble: Duration,
    /// Whole matches per rule label, in library order (active rules only).
    pub matches_per_rule: Vec<(&'static str, usize)>,
    /// Candidates produced by matching, before dedup.
    pub raw_candidates: usize,
}

/// Tokenizer output bundled with resolution details and timings.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub tokens: Vec<Token>,
    pub resolution: ResolveOutcome,
    pub metrics: RunMetrics,
}

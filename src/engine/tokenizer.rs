//! Pipeline orchestration for one input.
//!
//! ```text
//! (0) trigger scan     -> buckets, active rule ids
//! (1) match            -> every active rule over the whole input
//! (2) dedup            -> drop empty/duplicate candidates
//! (3) resolve          -> non-overlapping, start-ordered candidates
//! (4) assemble         -> gap-free Vec<Token>
//! ```
//!
//! A `Tokenizer` borrows the input and the library and is consumed by `run`;
//! it carries no state between inputs.

use super::assemble::assemble;
use super::dedup::dedup_candidates;
use super::library::{RuleId, RuleLibrary};
use super::metrics::{RunMetrics, RunResult};
use super::resolve::resolve_overlaps;
use super::trigger::TriggerInfo;
use crate::{Candidate, Options, Token};
use std::time::Instant;

#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    library: &'a RuleLibrary,
    /// Rules admitted by the trigger scan, in library order.
    active: Vec<RuleId>,
}

impl<'a> Tokenizer<'a> {
    /// Prepare a run over `input`, selecting the rules that may match it.
    pub fn new(input: &'a str, library: &'a RuleLibrary, options: &Options) -> Self {
        let all = 0..library.len();
        let active: Vec<RuleId> = if options.gate_rules {
            let trigger = TriggerInfo::scan(input);
            tracing::trace!(buckets = ?trigger.buckets, "trigger scan");
            all.filter(|&id| trigger.admits(library.get(id).rule.buckets)).collect()
        } else {
            all.collect()
        };

        tracing::debug!(active = active.len(), total = library.len(), "rules selected");
        Tokenizer { input, library, active }
    }

    /// Labels of the rules that will run, in library order.
    pub fn active_rule_labels(&self) -> Vec<&'static str> {
        self.active.iter().map(|&id| self.library.get(id).rule.label).collect()
    }

    /// Run the pipeline and return timing and resolution details.
    pub fn run_with_metrics(self, options: &Options) -> RunResult {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();

        let matching_start = Instant::now();
        let mut candidates: Vec<Candidate> = Vec::new();
        for &id in &self.active {
            let rule = self.library.get(id);
            let found = rule.collect_candidates(self.input, &mut candidates);
            metrics.matches_per_rule.push((rule.rule.label, found));
        }
        metrics.raw_candidates = candidates.len();
        metrics.matching = matching_start.elapsed();

        let resolve_start = Instant::now();
        let candidates = dedup_candidates(self.input, candidates);
        let resolution = resolve_overlaps(candidates, options.max_resolution_passes);
        metrics.resolve = resolve_start.elapsed();

        let assemble_start = Instant::now();
        let tokens = assemble(self.input, &resolution.kept);
        metrics.assemble = assemble_start.elapsed();

        metrics.total = total_start.elapsed();
        tracing::debug!(
            raw = metrics.raw_candidates,
            kept = resolution.kept.len(),
            passes = resolution.passes,
            tokens = tokens.len(),
            "tokenized"
        );

        RunResult { tokens, resolution, metrics }
    }

    /// Run the pipeline and return only the tokens.
    pub fn run(self, options: &Options) -> Vec<Token> {
        self.run_with_metrics(options).tokens
    }
}

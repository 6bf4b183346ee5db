//! Candidate clean-up before resolution.
//!
//! Several sub-cases of one rule can tag the same range, and a scanner can
//! report a range that tags nothing. This pass:
//!
//! - drops empty ranges and ranges that are out of bounds or not on character
//!   boundaries (a custom scanner could produce those)
//! - drops exact duplicates by `(rule, start, end)`, keeping the first
//!
//! A duplicate always overlaps its twin at equal priority, so at most one of
//! them can survive resolution anyway. Removing it here keeps the quadratic
//! resolver's input small.

use crate::{Candidate, RuleName};
use std::collections::HashSet;

/// Identity of a candidate for deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CandidateKey {
    pub(crate) rule: RuleName,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl CandidateKey {
    pub(crate) fn from_candidate(c: &Candidate) -> Self {
        CandidateKey { rule: c.rule, start: c.start, end: c.end }
    }
}

/// Remove unusable and duplicate candidates, preserving order.
pub(crate) fn dedup_candidates(input: &str, candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<CandidateKey> = HashSet::with_capacity(candidates.len());

    candidates
        .into_iter()
        .filter(|c| {
            c.start < c.end
                && c.end <= input.len()
                && input.is_char_boundary(c.start)
                && input.is_char_boundary(c.end)
        })
        .filter(|c| seen.insert(CandidateKey::from_candidate(c)))
        .collect()
}

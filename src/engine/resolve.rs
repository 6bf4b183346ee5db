//! Overlap resolution.
//!
//! Matching produces candidates that may overlap (different rules tagging the
//! same letters, or one rule's context overlapping another's tag). Resolution
//! reduces them to a start-ordered, pairwise non-overlapping list:
//!
//! ```text
//! sort by (start, priority)            stable; stronger rule first on equal start
//! loop:
//!   scan adjacent pairs from the end   first pair with prev.end > curr.start
//!   drop the weaker one entirely       larger priority number; on a tie the later one
//!   restart                            until a pass finds no overlap
//! ```
//!
//! Spans are never truncated: a losing candidate disappears as a whole.
//!
//! ## Pass cap
//!
//! Each pass removes exactly one candidate, so the loop always terminates, but
//! the number of passes is still bounded by `max_passes`. If the cap is hit the
//! remaining list is made non-overlapping by a greedy left-to-right sweep (the
//! earlier candidate of each overlapping pair wins) and the outcome is flagged
//! as `capped`. This is an escape valve; it is not expected to trigger with the
//! built-in rules.

use crate::Candidate;

/// Result of resolving one candidate list.
#[derive(Debug, Clone, Default)]
pub struct ResolveOutcome {
    /// Non-overlapping candidates, ascending by start.
    pub kept: Vec<Candidate>,
    /// Number of resolution passes performed.
    pub passes: usize,
    /// Whether the pass cap stopped resolution early.
    pub capped: bool,
}

/// Resolve overlapping `candidates` by priority.
pub(crate) fn resolve_overlaps(mut candidates: Vec<Candidate>, max_passes: usize) -> ResolveOutcome {
    candidates.sort_by_key(|c| (c.start, c.priority));

    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        let Some(idx) = last_overlap(&candidates) else {
            return ResolveOutcome { kept: candidates, passes, capped: false };
        };

        let (prev, curr) = (&candidates[idx - 1], &candidates[idx]);
        let loser = if curr.priority < prev.priority { idx - 1 } else { idx };
        tracing::trace!(
            dropped = candidates[loser].label,
            start = candidates[loser].start,
            end = candidates[loser].end,
            "overlap resolved"
        );
        candidates.remove(loser);
    }

    if last_overlap(&candidates).is_none() {
        return ResolveOutcome { kept: candidates, passes, capped: false };
    }

    tracing::warn!(passes, remaining = candidates.len(), "overlap resolution hit its pass cap; keeping a greedy subset");
    ResolveOutcome { kept: greedy_sweep(candidates), passes, capped: true }
}

/// Index `i` of the last adjacent pair `(i - 1, i)` that overlaps.
fn last_overlap(candidates: &[Candidate]) -> Option<usize> {
    (1..candidates.len()).rev().find(|&i| candidates[i - 1].end > candidates[i].start)
}

/// Keep each candidate that starts at or after the end of the last kept one.
fn greedy_sweep(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for c in candidates {
        if kept.last().is_none_or(|last| last.end <= c.start) {
            kept.push(c);
        }
    }
    kept
}

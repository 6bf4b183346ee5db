//! Match execution.
//!
//! Every active rule scans the whole input independently of the others. Per
//! rule the scan behaves like a global regex search:
//!
//! ```text
//! cursor ──▶ leftmost match at or after cursor
//!            ├─ push one candidate per tagged range
//!            └─ cursor = end of the *whole* match (context included)
//!               (or one character further if the match was empty)
//! ```
//!
//! Only the tagged range becomes a candidate; the context a rule consulted
//! (following throat letter, preceding vowel, word boundary) is not part of
//! `[start, end)`. Candidates come out grouped by rule, in rule order; the
//! resolver establishes the final order.

use super::library::{CompiledMatcher, CompiledRule};
use crate::{Candidate, Span};

impl CompiledRule {
    /// Leftmost match starting at or after `from`: the whole match and the
    /// tagged ranges inside it.
    fn find_at(&self, input: &str, from: usize) -> Option<(Span, Vec<Span>)> {
        match &self.matcher {
            CompiledMatcher::Regex { regex, groups } => {
                let caps = regex.captures_at(input, from)?;
                let whole = caps.get(0)?;
                let tagged = groups.iter().filter_map(|&idx| caps.get(idx)).map(|m| Span::new(m.start(), m.end())).collect();
                Some((Span::new(whole.start(), whole.end()), tagged))
            }
            CompiledMatcher::Scan(scan) => {
                let mut positions =
                    input[from..].char_indices().map(|(i, _)| from + i).chain(std::iter::once(input.len()));
                positions.find_map(|pos| scan(input, pos)).map(|hit| (hit.whole, vec![hit.tagged]))
            }
        }
    }

    /// Run this rule over all of `input`, appending candidates to `out`.
    ///
    /// Returns the number of whole matches found.
    pub(crate) fn collect_candidates(&self, input: &str, out: &mut Vec<Candidate>) -> usize {
        let mut cursor = 0;
        let mut matches = 0;

        while cursor <= input.len() {
            let Some((whole, tagged)) = self.find_at(input, cursor) else {
                break;
            };
            matches += 1;

            for span in tagged {
                out.push(Candidate {
                    rule: self.rule.name,
                    label: self.rule.label,
                    priority: self.rule.priority,
                    start: span.start,
                    end: span.end,
                });
            }

            // An empty match (or a scanner reporting no progress) must not stall the scan.
            cursor = if whole.is_empty() || whole.end <= cursor {
                next_char_boundary(input, whole.end.max(cursor))
            } else {
                whole.end
            };
        }

        matches
    }
}

/// Byte offset of the character after `at`, or past the end when `at` is the end.
fn next_char_boundary(input: &str, at: usize) -> usize {
    match input.get(at..).and_then(|rest| rest.chars().next()) {
        Some(c) => at + c.len_utf8(),
        None => input.len() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hit, Rule, RuleLibrary, RuleName};

    fn collect(lib: &RuleLibrary, input: &str) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for rule in lib.rules() {
            rule.collect_candidates(input, &mut out);
        }
        out.iter().map(|c| (c.start, c.end)).collect()
    }

    fn empty_at_every_position(_: &str, pos: usize) -> Option<Hit> {
        Some(Hit { whole: Span::new(pos, pos), tagged: Span::new(pos, pos) })
    }

    fn letter_a(text: &str, pos: usize) -> Option<Hit> {
        text[pos..].starts_with('a').then(|| Hit { whole: Span::new(pos, pos + 1), tagged: Span::new(pos, pos + 1) })
    }

    fn at_end(text: &str, pos: usize) -> Option<Hit> {
        (pos == text.len()).then(|| Hit { whole: Span::new(pos, pos), tagged: Span::new(pos, pos) })
    }

    #[test]
    fn zero_length_matches_do_not_stall() {
        let lib = RuleLibrary::new(vec![Rule::scanner(RuleName::Ghunna, "empty", empty_at_every_position)]);
        // One empty match per character boundary, including the end.
        assert_eq!(collect(&lib, "ab\u{0646}"), vec![(0, 0), (1, 1), (2, 2), (4, 4)]);
    }

    #[test]
    fn scans_the_entire_text() {
        let lib = RuleLibrary::new(vec![Rule::scanner(RuleName::Qalqala, "a", letter_a)]);
        assert_eq!(collect(&lib, "xaxxa\u{064E}a"), vec![(1, 2), (4, 5), (7, 8)]);
    }

    #[test]
    fn scanner_is_tried_at_the_end_of_the_text() {
        let lib = RuleLibrary::new(vec![Rule::scanner(RuleName::Ghunna, "end", at_end)]);
        assert_eq!(collect(&lib, "ab"), vec![(2, 2)]);
        assert_eq!(collect(&lib, ""), vec![(0, 0)]);
    }

    #[test]
    fn regex_tags_only_the_named_capture() {
        let lib = RuleLibrary::new(vec![Rule::pattern(RuleName::Izhar, "izhar", r"(?<izhar>n)\x{20}*h")]);
        assert_eq!(collect(&lib, "an  h nh"), vec![(1, 2), (6, 7)]);
    }

    #[test]
    fn scan_resumes_after_the_whole_match() {
        // The context `b` is consumed, so the overlapping `bb` starting at 1 is not reported.
        let lib = RuleLibrary::new(vec![Rule::pattern(RuleName::Ghunna, "pair", r"(?<pair>b)b")]);
        assert_eq!(collect(&lib, "bbb"), vec![(0, 1)]);
    }
}

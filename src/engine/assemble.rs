//! Token assembly: turn resolved candidates into a gap-free token stream.
//!
//! ```text
//! input:     |-----|=====|--|=======|----|
//! resolved:        [ r1  ]  [  r2   ]
//! tokens:    none   r1   none  r2    none
//! ```
//!
//! Empty gaps produce no token. With no candidates at all the whole input is
//! a single `none` token, which for empty input is the zero-length token
//! `{none, 0, 0, ""}`.

use crate::{Candidate, RuleName, Token};

/// Build the token stream for `input` from start-ordered, non-overlapping
/// `resolved` candidates.
pub(crate) fn assemble(input: &str, resolved: &[Candidate]) -> Vec<Token> {
    if resolved.is_empty() {
        return vec![Token::new(input, RuleName::None, 0, input.len())];
    }

    let mut tokens = Vec::with_capacity(resolved.len() * 2 + 1);
    let mut last_end = 0;

    for c in resolved {
        if c.start > last_end {
            tokens.push(Token::new(input, RuleName::None, last_end, c.start));
        }
        tokens.push(Token::new(input, c.rule, c.start, c.end));
        last_end = c.end;
    }

    if last_end < input.len() {
        tokens.push(Token::new(input, RuleName::None, last_end, input.len()));
    }

    tokens
}

//! Errors raised while building a rule library.
//!
//! None of these abort construction: the offending rule is left out of the
//! active set and the error is kept on the library for inspection.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// The rule's regex pattern does not compile.
    #[error("rule `{label}` has an invalid pattern: {source}")]
    InvalidPattern {
        label: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The pattern compiles but has no named capture designating what to tag.
    #[error("rule `{label}` has no named capture group to tag")]
    MissingCapture { label: &'static str },
}

impl RuleError {
    /// Label of the rule that was rejected.
    pub fn label(&self) -> &'static str {
        match self {
            RuleError::InvalidPattern { label, .. } | RuleError::MissingCapture { label } => label,
        }
    }
}

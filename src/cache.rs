//! Memoized tokenization keyed by text.
//!
//! A `TokenCache` is owned by whoever renders text (one per session, say) and
//! passed around explicitly. Entries are inserted on first request and never
//! evicted; dropping the cache is the only way to clear it.

use crate::api::{Options, default_library, tokenize_with};
use crate::engine::RuleLibrary;
use crate::Token;
use std::collections::HashMap;

#[derive(Debug)]
pub struct TokenCache<'l> {
    library: &'l RuleLibrary,
    options: Options,
    entries: HashMap<String, Vec<Token>>,
}

impl<'l> TokenCache<'l> {
    pub fn new(library: &'l RuleLibrary) -> Self {
        Self::with_options(library, Options::default())
    }

    pub fn with_options(library: &'l RuleLibrary, options: Options) -> Self {
        TokenCache { library, options, entries: HashMap::new() }
    }

    /// Tokens for `text`, tokenizing it only if it has not been seen before.
    pub fn get_or_tokenize(&mut self, text: &str) -> &[Token] {
        if !self.entries.contains_key(text) {
            let tokens = tokenize_with(text, self.library, &self.options);
            tracing::trace!(len = text.len(), tokens = tokens.len(), "cache miss");
            self.entries.insert(text.to_string(), tokens);
        }
        self.entries.get(text).map(Vec::as_slice).unwrap_or_default()
    }

    /// Tokens for `text` if it is already cached.
    pub fn get(&self, text: &str) -> Option<&[Token]> {
        self.entries.get(text).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TokenCache<'static> {
    fn default() -> Self {
        TokenCache::new(default_library())
    }
}

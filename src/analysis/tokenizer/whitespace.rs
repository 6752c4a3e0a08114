//! Whitespace tokenizer implementation.

use super::{TokenSet, Tokenizer};

/// A tokenizer that lowercases values and splits them on whitespace.
///
/// Each word becomes its own token, so prefix queries match the start of
/// any word but never span word boundaries.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, values: &[&str]) -> TokenSet {
        values
            .iter()
            .flat_map(|value| {
                self.normalize(value)
                    .split_whitespace()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn normalize(&self, value: &str) -> String {
        value.trim().to_lowercase()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

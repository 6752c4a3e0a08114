//! Tokenizer implementations for index construction.
//!
//! A tokenizer has two jobs. It turns the indexable values of an item into a
//! set of tokens, which become keys of the index, and it normalizes strings.
//! Normalization is applied to values before they are tokenized and to every
//! query before it is looked up, so the two must agree for lookups to work.
//!
//! # Available Tokenizers
//!
//! - [`standard::StandardTokenizer`] - Suffix phrases with hyphen and bracket variants (default)
//! - [`whitespace::WhitespaceTokenizer`] - One token per whitespace-separated word
//!
//! # Examples
//!
//! ```
//! use lodestar::analysis::tokenizer::Tokenizer;
//! use lodestar::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens = tokenizer.tokenize(&["Hello world"]);
//! assert!(tokens.contains("hello"));
//! assert!(tokens.contains("world"));
//! ```

use std::collections::BTreeSet;

/// A deduplicated set of tokens. Ordered so that tokenization is deterministic.
pub type TokenSet = BTreeSet<String>;

/// Trait for tokenizers that convert item values into index tokens.
///
/// The trait requires `Send + Sync` so an index, and the tokenizer it holds,
/// can be shared between threads.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lodestar::analysis::tokenizer::{TokenSet, Tokenizer};
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, values: &[&str]) -> TokenSet {
///         values
///             .iter()
///             .flat_map(|value| value.split(','))
///             .map(|part| self.normalize(part))
///             .filter(|part| !part.is_empty())
///             .collect()
///     }
///
///     fn normalize(&self, value: &str) -> String {
///         value.trim().to_lowercase()
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let tokens = CommaTokenizer.tokenize(&["Red, Green", "blue"]);
/// assert_eq!(tokens.len(), 3);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize all values of one item into a single set of unique tokens.
    fn tokenize(&self, values: &[&str]) -> TokenSet;

    /// Normalize a string (e.g. lowercasing). Applied to values before
    /// tokenization and to all queries before searching.
    fn normalize(&self, value: &str) -> String;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod standard;
pub mod whitespace;

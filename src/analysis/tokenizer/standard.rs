//! The default tokenizer.
//!
//! Built for autocomplete over short labels (names, titles, identifiers).
//! Every value is indexed under each of its suffix phrases so that a query
//! can start at any word:
//!
//! ```text
//! "it just works" -> "it just works", "just works", "works"
//! ```
//!
//! Values containing hyphens are additionally indexed with hyphens treated
//! as word separators, and tokens containing brackets are additionally
//! indexed with the brackets removed.

use log::warn;

use super::{TokenSet, Tokenizer};

/// Tokens shorter than this (in bytes) get no bracket-free variant.
const MIN_VARIATION_LEN: usize = 4;

/// Values must be longer than this (in bytes) for underscore and hyphen rewriting.
const MIN_REWRITE_LEN: usize = 3;

const BRACKETS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

/// Case-insensitive suffix-phrase tokenizer.
///
/// Normalization lowercases and trims the value; values longer than three
/// bytes also have underscores turned into spaces.
///
/// # Examples
///
/// ```
/// use lodestar::analysis::tokenizer::Tokenizer;
/// use lodestar::analysis::tokenizer::standard::StandardTokenizer;
///
/// let tokenizer = StandardTokenizer::new();
/// let tokens: Vec<String> = tokenizer.tokenize(&["It_Just-Works"]).into_iter().collect();
/// assert_eq!(
///     tokens,
///     vec!["it just works", "it just-works", "just works", "just-works", "works"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct StandardTokenizer;

impl StandardTokenizer {
    /// Create a new standard tokenizer.
    pub fn new() -> Self {
        StandardTokenizer
    }

    /// Tokenize a single value.
    pub fn tokenize_value(&self, value: &str) -> TokenSet {
        let normalized = self.normalize(value);
        let mut phrases = suffix_phrases(&normalized);
        if phrases.is_empty() {
            return TokenSet::new();
        }

        if value.contains('-') && value.len() > MIN_REWRITE_LEN {
            phrases.extend(suffix_phrases(&normalized.replace('-', " ")));
        }

        with_bracket_variants(phrases)
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, values: &[&str]) -> TokenSet {
        let mut tokens = TokenSet::new();
        for value in values {
            let value_tokens = self.tokenize_value(value);
            if value_tokens.is_empty() {
                warn!("Tokenization for item value returned an empty set: {value:?}");
                continue;
            }
            tokens.extend(value_tokens);
        }
        tokens
    }

    fn normalize(&self, value: &str) -> String {
        let normalized = value.to_lowercase();
        let normalized = normalized.trim();
        if normalized.len() > MIN_REWRITE_LEN {
            normalized.replace('_', " ")
        } else {
            normalized.to_string()
        }
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// Every suffix of the word sequence, re-joined with single spaces.
fn suffix_phrases(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    (0..words.len())
        .map(|start| words[start..].join(" "))
        .collect()
}

/// Collect phrases into a set, adding a bracket-free copy of each phrase
/// that contains brackets, e.g. `"(hello) world"` also yields `"hello world"`.
fn with_bracket_variants(phrases: Vec<String>) -> TokenSet {
    let mut tokens = TokenSet::new();
    for phrase in phrases {
        if phrase.len() >= MIN_VARIATION_LEN && phrase.contains(&BRACKETS[..]) {
            let stripped = phrase.replace(&BRACKETS[..], "");
            if !stripped.is_empty() {
                tokens.insert(stripped);
            }
        }
        tokens.insert(phrase);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> Vec<String> {
        StandardTokenizer::new().tokenize(values).into_iter().collect()
    }

    fn sorted(mut expected: Vec<&str>) -> Vec<String> {
        expected.sort_unstable();
        expected.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_single_words_with_aliases() {
        assert_eq!(
            tokens(&["apple", "fruit", "red"]),
            sorted(vec!["apple", "fruit", "red"])
        );
    }

    #[test]
    fn test_multiple_words() {
        assert_eq!(
            tokens(&["it just works"]),
            sorted(vec!["it just works", "just works", "works"])
        );
    }

    #[test]
    fn test_underscores() {
        assert_eq!(
            tokens(&["it_just_works"]),
            sorted(vec!["it just works", "just works", "works"])
        );
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(
            tokens(&["it-just-works"]),
            sorted(vec!["it just works", "just works", "works", "it-just-works"])
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            tokens(&["it (just) works"]),
            sorted(vec![
                "it just works",
                "just works",
                "works",
                "it (just) works",
                "(just) works",
            ])
        );
    }

    #[test]
    fn test_everything() {
        assert_eq!(
            tokens(&["it (just) works-really!"]),
            sorted(vec![
                "it just works really!",
                "just works really!",
                "works really!",
                "really!",
                "it just works-really!",
                "just works-really!",
                "works-really!",
                "it (just) works-really!",
                "(just) works-really!",
                "it (just) works really!",
                "(just) works really!",
            ])
        );
    }

    #[test]
    fn test_duplicates_collapse_across_values() {
        assert_eq!(
            tokens(&["yellow fruit", "fruit"]),
            sorted(vec!["yellow fruit", "fruit"])
        );
    }

    #[test]
    fn test_blank_value_yields_nothing() {
        assert!(tokens(&["   "]).is_empty());
        assert!(tokens(&[]).is_empty());
        assert_eq!(tokens(&["", "ok"]), sorted(vec!["ok"]));
    }

    #[test]
    fn test_short_values_keep_underscores_and_hyphens() {
        assert_eq!(tokens(&["a_b"]), sorted(vec!["a_b"]));
        assert_eq!(tokens(&["a-b"]), sorted(vec!["a-b"]));
        assert_eq!(tokens(&["(a)"]), sorted(vec!["(a)"]));
    }

    #[test]
    fn test_normalize() {
        let tokenizer = StandardTokenizer::new();
        assert_eq!(tokenizer.normalize("  Hello World  "), "hello world");
        assert_eq!(tokenizer.normalize("SNAKE_CASE"), "snake case");
        assert_eq!(tokenizer.normalize("a_b"), "a_b");
        assert_eq!(tokenizer.normalize("   "), "");
        assert_eq!(tokenizer.name(), "standard");
    }
}

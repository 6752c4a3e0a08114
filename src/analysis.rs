//! Text analysis: turning item values into index tokens.
//!
//! The index only talks to the [`Tokenizer`](tokenizer::Tokenizer) trait.
//! [`StandardTokenizer`](tokenizer::standard::StandardTokenizer) is used when
//! no tokenizer is configured.

pub mod tokenizer;

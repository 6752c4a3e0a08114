//! # Lodestar
//!
//! A generic, immutable prefix search index with ranked results, built for
//! autocomplete.
//!
//! ## Features
//!
//! - Any type implementing [`IndexableItem`](item::IndexableItem) can be indexed
//! - Persistent radix tree: indexing returns a new version and shares
//!   unchanged structure with the old one
//! - Top-K prefix search with early termination over rank-sorted posting lists
//! - Pluggable tokenizers
//!
//! ## Example
//!
//! ```
//! use lodestar::prelude::*;
//!
//! struct ExampleItem {
//!     text: String,
//!     rank: i64,
//!     aliases: Vec<String>,
//! }
//!
//! impl IndexableItem for ExampleItem {
//!     type Id = String;
//!
//!     fn indexable_values(&self) -> Vec<&str> {
//!         std::iter::once(self.text.as_str())
//!             .chain(self.aliases.iter().map(String::as_str))
//!             .collect()
//!     }
//!
//!     fn rank(&self) -> i64 {
//!         self.rank
//!     }
//!
//!     fn id(&self) -> String {
//!         self.text.clone()
//!     }
//! }
//!
//! let index = Index::new();
//! let index = index.index_items(vec![
//!     ExampleItem { text: "apple".into(), rank: 10, aliases: vec!["fruit".into()] },
//!     ExampleItem { text: "application".into(), rank: 15, aliases: vec!["app".into()] },
//! ])?;
//!
//! let results = index.prefix_search("app", 10, None);
//! for item in &results.hits {
//!     println!("{} (rank: {})", item.text, item.rank());
//! }
//! assert_eq!(results.len(), 2);
//! # Ok::<(), LodestarError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod index;
pub mod item;
pub mod posting;
pub mod search;
pub mod trie;

pub mod prelude {
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::standard::StandardTokenizer;
    pub use crate::config::IndexOptions;
    pub use crate::error::{LodestarError, Result};
    pub use crate::index::Index;
    pub use crate::item::IndexableItem;
    pub use crate::posting::PostingList;
    pub use crate::search::{QueryTimingInfo, ResultFilter, SearchResults};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

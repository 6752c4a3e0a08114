//! The immutable prefix index.
//!
//! An [`Index`] is a snapshot: a radix tree of token → [`PostingList`] plus
//! the tokenizer that produced the tokens. Indexing a batch never changes
//! the receiver; it returns a new `Index` that shares every untouched part
//! of the tree with the old one. Snapshots are cheap to clone and can be
//! queried from any number of threads at once.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::config::IndexOptions;
use crate::error::{LodestarError, Result};
use crate::item::IndexableItem;
use crate::posting::{BatchPostings, PostingList};
use crate::search::{self, ResultFilter, SearchResults};
use crate::trie::Tree;

/// An immutable, generic prefix search index.
///
/// # Examples
///
/// ```
/// use lodestar::index::Index;
/// use lodestar::item::IndexableItem;
///
/// struct Fruit {
///     name: &'static str,
///     rank: i64,
/// }
///
/// impl IndexableItem for Fruit {
///     type Id = &'static str;
///
///     fn indexable_values(&self) -> Vec<&str> {
///         vec![self.name]
///     }
///
///     fn rank(&self) -> i64 {
///         self.rank
///     }
///
///     fn id(&self) -> &'static str {
///         self.name
///     }
/// }
///
/// let empty = Index::new();
/// let index = empty
///     .index_items(vec![
///         Fruit { name: "apple", rank: 10 },
///         Fruit { name: "application", rank: 15 },
///         Fruit { name: "apply", rank: 8 },
///     ])
///     .unwrap();
///
/// let results = index.prefix_search("app", 2, None);
/// let names: Vec<&str> = results.iter().map(|fruit| fruit.name).collect();
/// assert_eq!(names, vec!["application", "apple"]);
///
/// // The empty index is still empty.
/// assert_eq!(empty.count(), 0);
/// ```
pub struct Index<T> {
    tree: Tree<PostingList<T>>,
    tokenizer: Arc<dyn Tokenizer>,
    parallel_build: bool,
}

impl<T: IndexableItem> Index<T> {
    /// Create a new empty index with the default tokenizer.
    pub fn new() -> Self {
        Self::with_options(IndexOptions::default())
    }

    /// Create a new empty index.
    pub fn with_options(options: IndexOptions) -> Self {
        Index {
            tree: Tree::new(),
            tokenizer: options.resolve_tokenizer(),
            parallel_build: options.parallel_build,
        }
    }

    /// Index a batch of items, returning a new index.
    ///
    /// Each item is tokenized and added to the posting list of every token
    /// it produced. Tokens already present in this index keep their
    /// existing items; the batch is merged in by rank. An empty batch
    /// returns this same version unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LodestarError::EmptyTokenSet`] if any item produces no
    /// tokens. Nothing from the batch is indexed in that case.
    pub fn index_items<I>(&self, items: I) -> Result<Index<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        if items.is_empty() {
            return Ok(self.clone());
        }

        let mut batch = BatchPostings::with_capacity(items.len());
        for item in &items {
            let tokens = self.tokenizer.tokenize(&item.indexable_values());
            if tokens.is_empty() {
                return Err(LodestarError::empty_token_set(&item.id()));
            }
            batch.add(item, tokens);
        }

        let token_count = batch.token_count();
        let lists = batch.into_sorted_lists(self.parallel_build);

        let mut txn = self.tree.txn();
        let mut merged = 0usize;
        for (token, postings) in lists {
            let list = match txn.get(token.as_bytes()) {
                Some(existing) => {
                    merged += 1;
                    existing.merge(&postings)
                }
                None => PostingList::from_sorted(postings),
            };
            txn.insert(token.as_bytes(), list);
        }
        let tree = txn.commit();

        debug!(
            "indexed {} items under {} tokens ({} new, {} merged); index now holds {} tokens",
            items.len(),
            token_count,
            token_count - merged,
            merged,
            tree.len()
        );

        Ok(Index {
            tree,
            tokenizer: Arc::clone(&self.tokenizer),
            parallel_build: self.parallel_build,
        })
    }

    /// Exact lookup of a single token.
    ///
    /// `value` is normalized with the index's tokenizer first. Returns `None`
    /// when nothing is indexed under it or it normalizes to an empty string.
    pub fn get(&self, value: &str) -> Option<&PostingList<T>> {
        let value = self.tokenizer.normalize(value);
        if value.is_empty() {
            return None;
        }
        self.tree.get(value.as_bytes())
    }

    /// Prefix search returning at most `limit` items by descending rank.
    ///
    /// A `limit` of zero means no limit. Results are deduplicated by
    /// [`IndexableItem::id`]; `filter`, if given, is applied to each
    /// candidate before aggregation. A prefix that normalizes to an empty
    /// string matches nothing.
    pub fn prefix_search(
        &self,
        prefix: &str,
        limit: usize,
        filter: Option<&ResultFilter<'_, T>>,
    ) -> SearchResults<T> {
        search::prefix_search(&self.tree, self.tokenizer.as_ref(), prefix, limit, filter)
    }

    /// Iterate over `(token, posting list)` pairs in token order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &PostingList<T>)> + '_ {
        self.tree.iter().map(|(key, list)| {
            // Keys are only ever inserted from `String` tokens.
            let token = std::str::from_utf8(key);
            debug_assert!(token.is_ok(), "token key is not UTF-8: {key:?}");
            (token.unwrap_or_default(), list)
        })
    }
}

impl<T> Index<T> {
    /// Number of distinct tokens in the index (not the number of items).
    pub fn count(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The tokenizer used for items and queries.
    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// Whether two indexes are the same version.
    pub fn same_version(&self, other: &Index<T>) -> bool {
        self.tree.ptr_eq(&other.tree)
    }
}

impl<T> Clone for Index<T> {
    fn clone(&self) -> Self {
        Index {
            tree: self.tree.clone(),
            tokenizer: Arc::clone(&self.tokenizer),
            parallel_build: self.parallel_build,
        }
    }
}

impl<T: IndexableItem> Default for Index<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("tokens", &self.tree.len())
            .field("tokenizer", &self.tokenizer.name())
            .field("parallel_build", &self.parallel_build)
            .finish()
    }
}

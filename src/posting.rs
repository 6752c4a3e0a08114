//! Posting lists: the items attached to one token.
//!
//! A [`PostingList`] is always sorted by descending rank. Prefix search
//! relies on this to stop scanning a list as soon as an item can no longer
//! make it into the result set.

use std::cmp::Reverse;
use std::slice;
use std::sync::Arc;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::tokenizer::TokenSet;
use crate::item::IndexableItem;

/// Batches touching more tokens than this sort their lists on the rayon pool.
pub const PARALLEL_SORT_THRESHOLD: usize = 1000;

/// An immutable, rank-descending list of items sharing a token.
///
/// Cloning is cheap: the list is reference counted and shared between
/// every index version that contains it.
#[derive(Debug)]
pub struct PostingList<T> {
    items: Arc<[Arc<T>]>,
}

impl<T> Clone for PostingList<T> {
    fn clone(&self) -> Self {
        PostingList {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> PostingList<T> {
    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items, highest rank first.
    pub fn iter(&self) -> slice::Iter<'_, Arc<T>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Arc<T>] {
        &self.items
    }
}

impl<T: IndexableItem> PostingList<T> {
    /// Wrap a list that is already sorted by descending rank.
    pub(crate) fn from_sorted(items: Vec<Arc<T>>) -> Self {
        debug_assert!(is_rank_sorted(&items));
        PostingList {
            items: items.into(),
        }
    }

    /// Merge a rank-descending batch into this list, producing a new list.
    ///
    /// Equivalent to appending `batch` and stable-sorting by descending
    /// rank: on equal ranks, items already in the list come first.
    pub(crate) fn merge(&self, batch: &[Arc<T>]) -> Self {
        let mut merged = Vec::with_capacity(self.items.len() + batch.len());
        let mut existing = self.items.iter().peekable();
        let mut incoming = batch.iter().peekable();

        loop {
            let take_incoming = match (existing.peek(), incoming.peek()) {
                (Some(old), Some(new)) => new.rank() > old.rank(),
                _ => break,
            };
            let next = if take_incoming {
                incoming.next()
            } else {
                existing.next()
            };
            merged.extend(next.cloned());
        }
        merged.extend(existing.cloned());
        merged.extend(incoming.cloned());

        PostingList::from_sorted(merged)
    }
}

impl<'a, T> IntoIterator for &'a PostingList<T> {
    type Item = &'a Arc<T>;
    type IntoIter = slice::Iter<'a, Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sort items by descending rank. Ties keep their input order.
pub(crate) fn sort_by_rank<T: IndexableItem>(items: &mut [Arc<T>]) {
    items.sort_by_key(|item| Reverse(item.rank()));
}

fn is_rank_sorted<T: IndexableItem>(items: &[Arc<T>]) -> bool {
    items.windows(2).all(|pair| pair[0].rank() >= pair[1].rank())
}

/// Token-to-items accumulator for one indexing batch.
///
/// Items are appended in batch order; the same item may appear more than
/// once under a token if it was supplied more than once.
#[derive(Debug)]
pub(crate) struct BatchPostings<T> {
    lists: AHashMap<String, Vec<Arc<T>>>,
}

impl<T: IndexableItem> BatchPostings<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        BatchPostings {
            lists: AHashMap::with_capacity(capacity),
        }
    }

    /// Record `item` under each of its tokens.
    pub(crate) fn add(&mut self, item: &Arc<T>, tokens: TokenSet) {
        for token in tokens {
            self.lists.entry(token).or_default().push(Arc::clone(item));
        }
    }

    /// Number of distinct tokens in the batch.
    pub(crate) fn token_count(&self) -> usize {
        self.lists.len()
    }

    /// Consume the batch, returning `(token, items)` pairs in token order with
    /// every item list sorted by descending rank.
    pub(crate) fn into_sorted_lists(self, parallel: bool) -> Vec<(String, Vec<Arc<T>>)> {
        let mut lists: Vec<(String, Vec<Arc<T>>)> = self.lists.into_iter().collect();

        if parallel && lists.len() > PARALLEL_SORT_THRESHOLD {
            lists.par_sort_unstable_by(|a, b| a.0.cmp(&b.0));
            lists
                .par_iter_mut()
                .for_each(|(_, items)| sort_by_rank(items));
        } else {
            lists.sort_unstable_by(|a, b| a.0.cmp(&b.0));
            for (_, items) in &mut lists {
                sort_by_rank(items);
            }
        }

        lists
    }
}

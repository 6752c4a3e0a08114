//! Ranked prefix search.
//!
//! A prefix query walks every token starting with the (normalized) prefix in
//! ascending token order and aggregates the items of their posting lists into
//! a bounded top-K heap. Because each posting list is sorted by descending
//! rank, scanning a list stops at the first item that cannot beat the
//! weakest item already kept, which keeps queries over huge shared prefixes
//! cheap in practice.

pub mod collector;

use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ahash::AHashSet;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Tokenizer;
use crate::item::IndexableItem;
use crate::posting::PostingList;
use crate::trie::Tree;

pub use collector::TopRankCollector;

/// Upper bound on the pre-allocated size of the deduplication set.
const SEEN_CAPACITY_HINT: usize = 1024;

/// Filter applied to candidate results.
///
/// Called with the normalized query, the token that matched, and the item.
/// Returning `false` excludes the item from the whole query: each item is
/// offered to the filter only once, under the first matching token in
/// token order.
pub type ResultFilter<'a, T> = dyn Fn(&str, &str, &T) -> bool + 'a;

/// Timing information for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTimingInfo {
    /// Normalization and limit setup.
    pub init_time: Duration,
    /// Locating the subtree of tokens sharing the prefix.
    pub seek_time: Duration,
    /// Scanning posting lists into the top-K heap.
    pub aggregation_time: Duration,
    /// Whole call, including draining the heap.
    pub total_time: Duration,
}

/// Results of a prefix search, highest rank first.
#[derive(Debug)]
pub struct SearchResults<T> {
    /// Matching items, sorted by descending rank and unique by identity.
    pub hits: Vec<Arc<T>>,
    /// Where the time went.
    pub timing: QueryTimingInfo,
}

impl<T> SearchResults<T> {
    pub(crate) fn empty(timing: QueryTimingInfo) -> Self {
        SearchResults {
            hits: Vec::new(),
            timing,
        }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<T>> {
        self.hits.iter()
    }
}

impl<T> IntoIterator for SearchResults<T> {
    type Item = Arc<T>;
    type IntoIter = std::vec::IntoIter<Arc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Run a ranked prefix search over one tree snapshot.
///
/// `limit` of zero means unbounded.
pub(crate) fn prefix_search<T: IndexableItem>(
    tree: &Tree<PostingList<T>>,
    tokenizer: &dyn Tokenizer,
    prefix: &str,
    limit: usize,
    filter: Option<&ResultFilter<'_, T>>,
) -> SearchResults<T> {
    let started = Instant::now();
    let prefix = tokenizer.normalize(prefix);
    if prefix.is_empty() {
        return SearchResults::empty(QueryTimingInfo::default());
    }

    let mut collector = TopRankCollector::new(limit);
    let mut seen: AHashSet<T::Id> = AHashSet::with_capacity(
        collector.max_hits().min(SEEN_CAPACITY_HINT),
    );

    let seek_started = Instant::now();
    let matches = tree.iter_prefix(prefix.as_bytes());
    let aggregation_started = Instant::now();

    for (key, postings) in matches {
        let token: Cow<'_, str> = String::from_utf8_lossy(key);
        if postings.is_empty() {
            warn!("Got empty posting list for token {token:?}");
            continue;
        }

        for item in postings {
            // An item is considered once per query, under the first token
            // that reaches it, whether or not the filter accepts it there.
            if !seen.insert(item.id()) {
                continue;
            }
            if let Some(filter) = filter
                && !filter(prefix.as_str(), &*token, &**item)
            {
                continue;
            }

            if !collector.offer(Arc::clone(item)) {
                // The rest of this list ranks no higher.
                break;
            }
        }
    }

    let aggregated = Instant::now();
    let hits = collector.into_sorted_vec();
    let finished = Instant::now();

    let timing = QueryTimingInfo {
        init_time: seek_started - started,
        seek_time: aggregation_started - seek_started,
        aggregation_time: aggregated - aggregation_started,
        total_time: finished - started,
    };
    trace!(
        "prefix {prefix:?}: {} hits in {:?} (init {:?}, seek {:?}, aggregation {:?})",
        hits.len(),
        timing.total_time,
        timing.init_time,
        timing.seek_time,
        timing.aggregation_time,
    );

    SearchResults { hits, timing }
}

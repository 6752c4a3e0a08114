//! Bounded top-K collection of ranked items.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use crate::item::IndexableItem;

/// A collector that keeps the `limit` highest-ranked items it is offered.
///
/// Backed by a min-heap, so the weakest kept item is always at the top and
/// can be compared against or evicted in `O(log k)`.
#[derive(Debug)]
pub struct TopRankCollector<T> {
    /// Maximum number of items to keep.
    max_hits: usize,
    /// Kept items (min-heap based on rank).
    hits: BinaryHeap<RankedHit<T>>,
    /// Arrival counter used to order equal ranks.
    offered: u64,
}

/// An item in the heap together with its rank at the time it was offered.
#[derive(Debug)]
struct RankedHit<T> {
    rank: i64,
    seq: u64,
    item: Arc<T>,
}

impl<T> PartialEq for RankedHit<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<T> Eq for RankedHit<T> {}

impl<T> PartialOrd for RankedHit<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RankedHit<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: lower ranks come first, and among equal ranks the later
        // arrival is evicted first.
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<T: IndexableItem> TopRankCollector<T> {
    /// Create a collector keeping at most `limit` items. A `limit` of zero
    /// means no limit.
    pub fn new(limit: usize) -> Self {
        let max_hits = if limit == 0 { usize::MAX } else { limit };
        TopRankCollector {
            max_hits,
            hits: BinaryHeap::with_capacity(limit.min(1024)),
            offered: 0,
        }
    }

    /// Get the maximum number of items to keep.
    pub fn max_hits(&self) -> usize {
        self.max_hits
    }

    /// Number of items currently kept.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Check if this collector still accepts items unconditionally.
    pub fn needs_more(&self) -> bool {
        self.hits.len() < self.max_hits
    }

    /// Rank of the weakest kept item, if any.
    pub fn min_rank(&self) -> Option<i64> {
        self.hits.peek().map(|hit| hit.rank)
    }

    /// Offer an item.
    ///
    /// Returns `false` when the collector is full and the item's rank is not
    /// strictly greater than the weakest kept rank. Callers scanning a
    /// rank-descending list can stop at that point: nothing later in the
    /// list can be accepted either.
    pub fn offer(&mut self, item: Arc<T>) -> bool {
        let rank = item.rank();
        if !self.needs_more() {
            match self.hits.peek() {
                Some(worst) if rank > worst.rank => {
                    self.hits.pop();
                }
                _ => return false,
            }
        }

        self.hits.push(RankedHit {
            rank,
            seq: self.offered,
            item,
        });
        self.offered += 1;
        true
    }

    /// Drain the collector into a list sorted by descending rank. Equal
    /// ranks keep their arrival order.
    pub fn into_sorted_vec(self) -> Vec<Arc<T>> {
        // Ascending in heap order is descending in rank.
        self.hits
            .into_sorted_vec()
            .into_iter()
            .map(|hit| hit.item)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Doc {
        id: u64,
        rank: i64,
    }

    impl IndexableItem for Doc {
        type Id = u64;

        fn indexable_values(&self) -> Vec<&str> {
            Vec::new()
        }

        fn rank(&self) -> i64 {
            self.rank
        }

        fn id(&self) -> u64 {
            self.id
        }
    }

    fn doc(id: u64, rank: i64) -> Arc<Doc> {
        Arc::new(Doc { id, rank })
    }

    fn ids(hits: Vec<Arc<Doc>>) -> Vec<u64> {
        hits.iter().map(|hit| hit.id).collect()
    }

    #[test]
    fn test_top_rank_collector() {
        let mut collector = TopRankCollector::new(3);

        assert_eq!(collector.max_hits(), 3);
        assert!(collector.needs_more());
        assert_eq!(collector.min_rank(), None);

        assert!(collector.offer(doc(1, 5)));
        assert!(collector.offer(doc(2, 8)));
        assert!(collector.offer(doc(3, 3)));

        assert!(!collector.needs_more());
        assert_eq!(collector.min_rank(), Some(3));

        // A better item replaces the worst one.
        assert!(collector.offer(doc(4, 9)));
        assert_eq!(collector.len(), 3);
        assert_eq!(collector.min_rank(), Some(5));

        // Equal to the minimum is not good enough.
        assert!(!collector.offer(doc(5, 5)));
        assert!(!collector.offer(doc(6, 1)));

        assert_eq!(ids(collector.into_sorted_vec()), vec![4, 2, 1]);
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let mut collector = TopRankCollector::new(0);
        assert_eq!(collector.max_hits(), usize::MAX);

        for i in 0..100 {
            assert!(collector.offer(doc(i, (i % 7) as i64)));
        }
        let hits = collector.into_sorted_vec();
        assert_eq!(hits.len(), 100);
        assert!(hits.windows(2).all(|pair| pair[0].rank >= pair[1].rank));
    }

    #[test]
    fn test_ties_keep_arrival_order() {
        let mut collector = TopRankCollector::new(3);
        collector.offer(doc(1, 7));
        collector.offer(doc(2, 7));
        collector.offer(doc(3, 7));

        // The latest of the tied items is evicted first.
        assert!(collector.offer(doc(4, 8)));
        assert_eq!(ids(collector.into_sorted_vec()), vec![4, 1, 2]);
    }

    #[test]
    fn test_ranked_hit_ordering() {
        let low = RankedHit {
            rank: 1,
            seq: 0,
            item: doc(1, 1),
        };
        let high = RankedHit {
            rank: 9,
            seq: 1,
            item: doc(2, 9),
        };
        let high_later = RankedHit {
            rank: 9,
            seq: 2,
            item: doc(3, 9),
        };

        // Higher rank should be "less" (for min-heap)
        assert!(high < low);
        // Same rank compares by arrival
        assert!(high < high_later);

        let mut heap = BinaryHeap::new();
        heap.push(high);
        heap.push(low);
        heap.push(high_later);
        assert_eq!(heap.peek().map(|hit| hit.rank), Some(1));
    }
}

//! Randomized checks of prefix search against a brute-force scan.

use std::sync::Arc;

use lodestar::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug)]
struct Entry {
    id: usize,
    rank: i64,
    values: Vec<String>,
}

impl IndexableItem for Entry {
    type Id = usize;

    fn indexable_values(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }

    fn rank(&self) -> i64 {
        self.rank
    }

    fn id(&self) -> usize {
        self.id
    }
}

fn random_word(rng: &mut impl Rng) -> String {
    let len = rng.random_range(1..=3);
    (0..len)
        .map(|_| ['a', 'b', 'c'][rng.random_range(0..3)])
        .collect()
}

fn random_entries(rng: &mut impl Rng, count: usize) -> Vec<Entry> {
    let mut ranks: Vec<i64> = (0..count as i64).collect();
    ranks.shuffle(rng);

    ranks
        .into_iter()
        .enumerate()
        .map(|(id, rank)| {
            let values = (0..rng.random_range(1..=2))
                .map(|_| {
                    let words: Vec<String> =
                        (0..rng.random_range(1..=3)).map(|_| random_word(rng)).collect();
                    words.join(" ")
                })
                .collect();
            Entry { id, rank, values }
        })
        .collect()
}

/// Ids of the top `limit` matches, found by tokenizing every item.
fn brute_force(
    tokenizer: &dyn Tokenizer,
    entries: &[Entry],
    prefix: &str,
    limit: usize,
) -> Vec<usize> {
    let prefix = tokenizer.normalize(prefix);
    if prefix.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&Entry> = entries
        .iter()
        .filter(|entry| {
            tokenizer
                .tokenize(&entry.indexable_values())
                .iter()
                .any(|token| token.starts_with(&prefix))
        })
        .collect();
    matches.sort_by_key(|entry| std::cmp::Reverse(entry.rank));
    if limit > 0 {
        matches.truncate(limit);
    }
    matches.into_iter().map(|entry| entry.id).collect()
}

fn ids(hits: &[Arc<Entry>]) -> Vec<usize> {
    hits.iter().map(|entry| entry.id).collect()
}

#[test]
fn test_top_k_matches_brute_force() -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..10 {
        let entries = random_entries(&mut rng, 200);
        let index = Index::new().index_items(entries.iter().map(|entry| Entry {
            id: entry.id,
            rank: entry.rank,
            values: entry.values.clone(),
        }))?;

        for _ in 0..30 {
            let prefix = random_word(&mut rng);
            for limit in [0, 1, 3, 10] {
                let expected = brute_force(index.tokenizer(), &entries, &prefix, limit);
                let results = index.prefix_search(&prefix, limit, None);
                assert_eq!(ids(&results.hits), expected, "prefix {prefix:?}, limit {limit}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_batches_equal_single_build() -> Result<()> {
    let mut rng = rand::rng();
    let entries = random_entries(&mut rng, 300);
    let copy = |entry: &Entry| Entry {
        id: entry.id,
        rank: entry.rank,
        values: entry.values.clone(),
    };

    let whole = Index::new().index_items(entries.iter().map(copy))?;

    let mut incremental = Index::new();
    for chunk in entries.chunks(37) {
        incremental = incremental.index_items(chunk.iter().map(copy))?;
    }

    assert_eq!(whole.count(), incremental.count());
    for ((a_token, a_list), (b_token, b_list)) in whole.tokens().zip(incremental.tokens()) {
        assert_eq!(a_token, b_token);
        let a_ranks: Vec<i64> = a_list.iter().map(|entry| entry.rank).collect();
        let b_ranks: Vec<i64> = b_list.iter().map(|entry| entry.rank).collect();
        assert_eq!(a_ranks, b_ranks, "token {a_token:?}");
    }

    for prefix in ["a", "b", "c", "ab", "ca", "a b"] {
        for limit in [0, 5] {
            assert_eq!(
                ids(&whole.prefix_search(prefix, limit, None).hits),
                ids(&incremental.prefix_search(prefix, limit, None).hits),
            );
        }
    }
    Ok(())
}

#[test]
fn test_sequential_build_matches_parallel() -> Result<()> {
    let mut rng = rand::rng();
    // Large enough to cross the parallel sort threshold.
    let entries = random_entries(&mut rng, 3000);
    let copy = |entry: &Entry| Entry {
        id: entry.id,
        rank: entry.rank,
        values: entry.values.clone(),
    };

    let parallel = Index::new().index_items(entries.iter().map(copy))?;
    let sequential = Index::with_options(IndexOptions::new().with_parallel_build(false))
        .index_items(entries.iter().map(copy))?;

    for prefix in ["a", "bb", "c a"] {
        assert_eq!(
            ids(&parallel.prefix_search(prefix, 0, None).hits),
            ids(&sequential.prefix_search(prefix, 0, None).hits),
        );
    }
    Ok(())
}

#[test]
fn test_results_are_unique_and_ordered() -> Result<()> {
    let mut rng = rand::rng();
    let entries = random_entries(&mut rng, 500);
    let index = Index::new().index_items(entries)?;

    for prefix in ["a", "b", "c"] {
        let results = index.prefix_search(prefix, 0, None);
        let mut seen = std::collections::HashSet::new();
        for pair in results.hits.windows(2) {
            assert!(pair[0].rank >= pair[1].rank);
        }
        for hit in &results.hits {
            assert!(seen.insert(hit.id), "duplicate id {}", hit.id);
        }
    }
    Ok(())
}

//! Radix tree nodes.
//!
//! A node owns the edge label that leads to it (`prefix`), an optional leaf
//! holding a full key and its value, and its outgoing edges sorted by the
//! first byte of each child's prefix. Children are shared through [`Arc`] so
//! that any number of tree versions can point at the same subtree.

use std::sync::Arc;

/// A stored key and its value.
#[derive(Debug, Clone)]
pub(crate) struct Leaf<V> {
    pub(crate) key: Box<[u8]>,
    pub(crate) value: V,
}

/// An outgoing edge, keyed by the first byte of the child's prefix.
#[derive(Debug, Clone)]
pub(crate) struct Edge<V> {
    pub(crate) label: u8,
    pub(crate) node: Arc<Node<V>>,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    pub(crate) prefix: Box<[u8]>,
    pub(crate) leaf: Option<Leaf<V>>,
    pub(crate) edges: Vec<Edge<V>>,
}

impl<V> Node<V> {
    /// Create the empty root node.
    pub(crate) fn root() -> Self {
        Node {
            prefix: Box::default(),
            leaf: None,
            edges: Vec::new(),
        }
    }

    /// Create a childless node holding a single leaf.
    pub(crate) fn with_leaf(prefix: &[u8], key: &[u8], value: V) -> Self {
        Node {
            prefix: prefix.into(),
            leaf: Some(Leaf {
                key: key.into(),
                value,
            }),
            edges: Vec::new(),
        }
    }

    /// Binary search the edges for `label`.
    ///
    /// Returns `Ok(position)` when an edge exists, `Err(insertion_point)` otherwise.
    pub(crate) fn edge_position(&self, label: u8) -> Result<usize, usize> {
        self.edges.binary_search_by_key(&label, |edge| edge.label)
    }

    pub(crate) fn child(&self, label: u8) -> Option<&Arc<Node<V>>> {
        self.edge_position(label)
            .ok()
            .map(|position| &self.edges[position].node)
    }

    /// Add an edge, keeping edges sorted. The label must not already exist.
    pub(crate) fn add_edge(&mut self, node: Arc<Node<V>>) {
        let label = node.prefix[0];
        match self.edge_position(label) {
            Ok(position) => self.edges[position].node = node,
            Err(position) => self.edges.insert(position, Edge { label, node }),
        }
    }
}

/// Length of the longest common prefix of `a` and `b`.
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

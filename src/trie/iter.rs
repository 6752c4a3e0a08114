//! Ordered iteration over a [`Tree`](super::Tree).

use super::node::Node;

/// Iterator over `(key, value)` pairs in ascending lexicographic key order.
///
/// Created by [`Tree::iter`](super::Tree::iter) and
/// [`Tree::iter_prefix`](super::Tree::iter_prefix). The iterator borrows the
/// tree it walks, so the snapshot cannot change underneath it; to scan again,
/// create a new one.
#[derive(Debug)]
pub struct Iter<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn empty() -> Self {
        Iter { stack: Vec::new() }
    }

    pub(crate) fn from_node(node: &'a Node<V>) -> Self {
        Iter { stack: vec![node] }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a [u8], &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Smallest label ends up on top of the stack.
            self.stack
                .extend(node.edges.iter().rev().map(|edge| edge.node.as_ref()));

            // A node's own key is a prefix of every key below it, so it sorts first.
            if let Some(leaf) = &node.leaf {
                return Some((&leaf.key[..], &leaf.value));
            }
        }
        None
    }
}

/// Find the node whose subtree holds exactly the keys starting with `prefix`.
pub(crate) fn seek_prefix<'a, V>(root: &'a Node<V>, prefix: &[u8]) -> Option<&'a Node<V>> {
    let mut node = root;
    let mut search = prefix;
    loop {
        if search.is_empty() {
            return Some(node);
        }
        let child = node.child(search[0])?;
        if search.starts_with(&child.prefix) {
            search = &search[child.prefix.len()..];
            node = &**child;
        } else if child.prefix.starts_with(search) {
            // The prefix ends part-way along this edge.
            return Some(&**child);
        } else {
            return None;
        }
    }
}

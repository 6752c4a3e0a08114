//! Persistent radix tree.
//!
//! [`Tree`] is an immutable, byte-keyed radix tree. Every version of a tree
//! is a cheap handle on a root node; nodes are reference counted and are
//! never changed once a version that contains them has been committed.
//! Writes go through a [`Txn`], which copies only the nodes on the path to
//! each written key and shares everything else with the version it started
//! from.
//!
//! # Examples
//!
//! ```
//! use lodestar::trie::Tree;
//!
//! let empty: Tree<u32> = Tree::new();
//!
//! let mut txn = empty.txn();
//! txn.insert(b"apple", 10);
//! txn.insert(b"apply", 8);
//! txn.insert(b"banana", 12);
//! let tree = txn.commit();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(empty.len(), 0);
//! assert_eq!(tree.get(b"apple"), Some(&10));
//!
//! let keys: Vec<&[u8]> = tree.iter_prefix(b"app").map(|(key, _)| key).collect();
//! assert_eq!(keys, vec![&b"apple"[..], &b"apply"[..]]);
//! ```

mod iter;
mod node;
mod txn;

use std::sync::Arc;

pub use iter::Iter;
pub use txn::Txn;

use node::Node;

/// An immutable radix tree snapshot.
#[derive(Debug)]
pub struct Tree<V> {
    root: Arc<Node<V>>,
    size: usize,
}

impl<V> Tree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Tree {
            root: Arc::new(Node::root()),
            size: 0,
        }
    }

    /// Number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Exact-match lookup, `O(key length)`.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        lookup(&self.root, key)
    }

    /// Iterate over every entry in ascending key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::from_node(&self.root)
    }

    /// Iterate over the entries whose key starts with `prefix`, in ascending
    /// key order.
    pub fn iter_prefix(&self, prefix: &[u8]) -> Iter<'_, V> {
        match iter::seek_prefix(&self.root, prefix) {
            Some(node) => Iter::from_node(node),
            None => Iter::empty(),
        }
    }

    /// Whether both handles point at the same root, i.e. are the same version.
    pub fn ptr_eq(&self, other: &Tree<V>) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }
}

impl<V: Clone> Tree<V> {
    /// Open a write transaction based on this tree. The tree itself is not
    /// affected by anything done through the transaction.
    pub fn txn(&self) -> Txn<V> {
        Txn::new(self)
    }
}

impl<V> Clone for Tree<V> {
    fn clone(&self) -> Self {
        Tree {
            root: Arc::clone(&self.root),
            size: self.size,
        }
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn lookup<'a, V>(root: &'a Node<V>, key: &[u8]) -> Option<&'a V> {
    let mut node = root;
    let mut search = key;
    loop {
        if search.is_empty() {
            return node.leaf.as_ref().map(|leaf| &leaf.value);
        }
        let child = node.child(search[0])?;
        search = search.strip_prefix(&child.prefix[..])?;
        node = &**child;
    }
}

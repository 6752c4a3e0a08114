//! Write transactions over a [`Tree`].

use std::sync::Arc;

use super::Tree;
use super::node::{Edge, Leaf, Node, common_prefix_len};

/// A batch of writes against a snapshot of a [`Tree`].
///
/// The transaction starts out sharing every node with its base tree. A write
/// copies the nodes on the path from the root to the key (`Arc::make_mut`)
/// and leaves every sibling subtree shared. Nodes that were already copied
/// by this transaction are owned by it alone and are updated in place, so a
/// batch of `n` writes allocates at most one new node per touched path
/// segment rather than one new path per write.
///
/// The base tree is never modified. [`Txn::commit`] hands back a new tree.
#[derive(Debug)]
pub struct Txn<V> {
    root: Arc<Node<V>>,
    size: usize,
}

impl<V: Clone> Txn<V> {
    pub(crate) fn new(base: &Tree<V>) -> Self {
        Txn {
            root: Arc::clone(&base.root),
            size: base.size,
        }
    }

    /// Stage a write of `value` under `key`, returning the value it replaces.
    pub fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        let old = insert_at(Arc::make_mut(&mut self.root), key, key, value);
        if old.is_none() {
            self.size += 1;
        }
        old
    }

    /// Read a key, including writes staged by this transaction.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        super::lookup(&self.root, key)
    }

    /// Number of keys the tree will hold once committed.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Finalize the staged writes into a new tree.
    pub fn commit(self) -> Tree<V> {
        Tree {
            root: self.root,
            size: self.size,
        }
    }
}

fn insert_at<V: Clone>(node: &mut Node<V>, key: &[u8], search: &[u8], value: V) -> Option<V> {
    if search.is_empty() {
        let leaf = Leaf {
            key: key.into(),
            value,
        };
        return node.leaf.replace(leaf).map(|old| old.value);
    }

    let position = match node.edge_position(search[0]) {
        Ok(position) => position,
        Err(position) => {
            let child = Node::with_leaf(search, key, value);
            node.edges.insert(
                position,
                Edge {
                    label: search[0],
                    node: Arc::new(child),
                },
            );
            return None;
        }
    };

    let child_prefix_len = node.edges[position].node.prefix.len();
    let common = common_prefix_len(search, &node.edges[position].node.prefix);
    if common == child_prefix_len {
        let child = Arc::make_mut(&mut node.edges[position].node);
        return insert_at(child, key, &search[common..], value);
    }

    // The key diverges inside the child's prefix: splice a new branch node
    // holding the shared part and hang the old child below it.
    let split = Node {
        prefix: search[..common].into(),
        leaf: None,
        edges: Vec::with_capacity(2),
    };
    let mut existing = std::mem::replace(&mut node.edges[position].node, Arc::new(split));
    let tail: Box<[u8]> = existing.prefix[common..].into();
    Arc::make_mut(&mut existing).prefix = tail;

    let split = Arc::make_mut(&mut node.edges[position].node);
    split.add_edge(existing);

    let rest = &search[common..];
    if rest.is_empty() {
        split.leaf = Some(Leaf {
            key: key.into(),
            value,
        });
    } else {
        split.add_edge(Arc::new(Node::with_leaf(rest, key, value)));
    }
    None
}

//! The capability set an item needs in order to be indexed.

use std::fmt::Debug;
use std::hash::Hash;

/// An item that can be stored in an [`Index`](crate::index::Index).
///
/// The index never looks inside an item beyond these three methods. Items
/// are wrapped in an [`Arc`](std::sync::Arc) once when they are indexed and
/// shared between every posting list they appear in.
///
/// # Examples
///
/// ```
/// use lodestar::item::IndexableItem;
///
/// struct Command {
///     id: u32,
///     name: String,
///     aliases: Vec<String>,
///     usage: i64,
/// }
///
/// impl IndexableItem for Command {
///     type Id = u32;
///
///     fn indexable_values(&self) -> Vec<&str> {
///         std::iter::once(self.name.as_str())
///             .chain(self.aliases.iter().map(String::as_str))
///             .collect()
///     }
///
///     fn rank(&self) -> i64 {
///         self.usage
///     }
///
///     fn id(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait IndexableItem: Send + Sync + 'static {
    /// Identity used to deduplicate search results. Never used for ordering.
    type Id: Eq + Hash + Clone + Debug + Send + Sync;

    /// The strings this item should be findable by. All of them are run
    /// through the tokenizer and the resulting tokens are merged into one set.
    fn indexable_values(&self) -> Vec<&str>;

    /// Weight of the item; higher ranks are returned first.
    fn rank(&self) -> i64;

    /// Unique identity of the item.
    fn id(&self) -> Self::Id;
}

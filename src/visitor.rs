//! Callbacks driven by the traversals in [`crate::traversal`].
//!
//! A [`Visitor`] sees each key once. A [`PrePostVisitor`] is told when a depth-first walk
//! enters a node, passes between two of its children, and leaves it; [`PreOrder`],
//! [`InOrder`] and [`PostOrder`] pick one of those moments and forward it to a plain
//! `Visitor`. Closures taking `&T` are visitors, so most callers never name these types:
//!
//! ```
//! use adt_tree::{Bst, Order, SearchTree, Tree};
//!
//! let mut tree = Bst::new();
//! for key in [2, 1, 3] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let mut keys = Vec::new();
//! tree.walk(Order::PostOrder, |key: &i32| keys.push(*key));
//! assert_eq!(keys, [1, 3, 2]);
//! ```

/// Sees the keys of a tree one at a time.
pub trait Visitor<T> {
    /// Called once per key.
    fn visit(&mut self, key: &T);

    /// Returning `true` stops the traversal before the next key.
    fn is_done(&self) -> bool {
        false
    }
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&T),
{
    fn visit(&mut self, key: &T) {
        self(key)
    }
}

/// The callbacks of a depth-first walk. For a node with keys `k0..kn` and child slots
/// `c0..=cn` the walk calls `pre_visit(k0..kn)`, then alternates `c0, in_visit(k0), c1, ...`,
/// and finishes with `post_visit` on the keys in reverse.
pub trait PrePostVisitor<T> {
    /// Before any child of the key's node is visited.
    fn pre_visit(&mut self, _key: &T) {}

    /// Between the children to the left and right of the key.
    fn in_visit(&mut self, _key: &T) {}

    /// After every child of the key's node is visited.
    fn post_visit(&mut self, _key: &T) {}

    /// Returning `true` stops the traversal.
    fn is_done(&self) -> bool {
        false
    }
}

/// Forwards `pre_visit` to the wrapped visitor.
#[derive(Debug)]
pub struct PreOrder<V>(pub V);

/// Forwards `in_visit` to the wrapped visitor. On a search tree this yields ascending keys.
#[derive(Debug)]
pub struct InOrder<V>(pub V);

/// Forwards `post_visit` to the wrapped visitor.
#[derive(Debug)]
pub struct PostOrder<V>(pub V);

impl<T, V: Visitor<T>> PrePostVisitor<T> for PreOrder<V> {
    fn pre_visit(&mut self, key: &T) {
        self.0.visit(key)
    }

    fn is_done(&self) -> bool {
        self.0.is_done()
    }
}

impl<T, V: Visitor<T>> PrePostVisitor<T> for InOrder<V> {
    fn in_visit(&mut self, key: &T) {
        self.0.visit(key)
    }

    fn is_done(&self) -> bool {
        self.0.is_done()
    }
}

impl<T, V: Visitor<T>> PrePostVisitor<T> for PostOrder<V> {
    fn post_visit(&mut self, key: &T) {
        self.0.visit(key)
    }

    fn is_done(&self) -> bool {
        self.0.is_done()
    }
}

/// Which order [`crate::Tree::walk`] hands out keys in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// A node's keys before its children.
    PreOrder,
    /// Each key between its left and right child.
    InOrder,
    /// A node's keys after its children.
    PostOrder,
    /// Level by level, left to right.
    LevelOrder,
}

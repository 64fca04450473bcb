//! The capabilities every tree in this crate shares.
//!
//! A tree is either empty or a node holding `key_count()` ordered keys and `fanout()`
//! child slots, each slot holding another (possibly empty) tree of the same type. Binary
//! nodes have one key and two slots, m-way nodes `n` keys and `n + 1` slots, and general
//! tree nodes one key and any number of slots. Everything else here, the traversals in
//! particular, is written against that shape only.

use crate::error::{Result, TreeError};
use crate::stack::Stack;
use crate::traversal::{self, Iter};
use crate::visitor::{InOrder, Order, PostOrder, PreOrder, PrePostVisitor, Visitor};

/// Read access to a tree plus the traversals built on it.
pub trait Tree: Sized {
    /// The element stored as a key.
    type Item;

    /// Whether this tree holds no node at all.
    fn is_empty(&self) -> bool;

    /// Number of keys in this node; zero when empty.
    fn key_count(&self) -> usize;

    /// The `index`th key of this node, for `index` in `0..key_count()`.
    fn key_at(&self, index: usize) -> Result<&Self::Item>;

    /// Number of child slots of this node, empty subtrees included.
    fn fanout(&self) -> usize;

    /// The subtree in slot `index`, for `index` in `0..fanout()`. It may be empty.
    fn child(&self, index: usize) -> Result<&Self>;

    /// Number of children this node exposes through [`Tree::subtree`].
    fn degree(&self) -> usize;

    /// The `index`th child for `index` in `0..degree()`.
    fn subtree(&self, index: usize) -> Result<&Self>;

    /// Drops every key and subtree, leaving the tree empty.
    fn purge(&mut self);

    /// The first key of this node.
    fn key(&self) -> Result<&Self::Item> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        self.key_at(0)
    }

    /// True for an occupied node whose child slots are all empty.
    fn is_leaf(&self) -> bool {
        !self.is_empty()
            && (0..self.fanout()).all(|slot| self.child(slot).map_or(true, Tree::is_empty))
    }

    /// Number of edges on the longest path down to an empty slot below the root. An empty
    /// tree has height -1 and a leaf height 0.
    fn height(&self) -> isize {
        let mut height = -1;
        let mut pending = Stack::new();
        pending.push((self, 0));
        while let Ok((tree, depth)) = pending.pop() {
            if tree.is_empty() {
                continue;
            }
            height = height.max(depth);
            for child in (0..tree.fanout()).filter_map(|slot| tree.child(slot).ok()) {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    /// Walks the tree depth first, reporting every key to `visitor`. See [`PrePostVisitor`]
    /// for the order of the callbacks.
    fn depth_first_traversal<V>(&self, visitor: &mut V)
    where
        V: PrePostVisitor<Self::Item>,
    {
        traversal::depth_first(self, visitor)
    }

    /// Walks the tree one level at a time, left to right.
    fn breadth_first_traversal<V>(&self, visitor: &mut V)
    where
        V: Visitor<Self::Item>,
    {
        traversal::breadth_first(self, visitor)
    }

    /// Shows every key to `visitor` in pre-order.
    fn accept<V>(&self, visitor: V)
    where
        V: Visitor<Self::Item>,
    {
        self.depth_first_traversal(&mut PreOrder(visitor))
    }

    /// Calls `f` on every key in the given order.
    fn walk<F>(&self, order: Order, mut f: F)
    where
        F: FnMut(&Self::Item),
    {
        match order {
            Order::PreOrder => self.depth_first_traversal(&mut PreOrder(f)),
            Order::InOrder => self.depth_first_traversal(&mut InOrder(f)),
            Order::PostOrder => self.depth_first_traversal(&mut PostOrder(f)),
            Order::LevelOrder => self.breadth_first_traversal(&mut f),
        }
    }

    /// Total number of keys in the tree.
    fn count(&self) -> usize {
        let mut count = 0;
        self.accept(|_: &Self::Item| count += 1);
        count
    }

    /// A restartable in-order iterator over the keys.
    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }
}

/// A [`Tree`] that keeps its keys ordered and can be searched.
pub trait SearchTree: Tree
where
    Self::Item: Ord,
{
    /// The stored key equal to `target`.
    fn find(&self, target: &Self::Item) -> Result<&Self::Item>;

    /// The smallest key.
    fn find_min(&self) -> Result<&Self::Item>;

    /// The largest key.
    fn find_max(&self) -> Result<&Self::Item>;

    /// Adds `key`, rejecting it if an equal key is already present.
    fn insert(&mut self, key: Self::Item) -> Result<()>;

    /// Removes the key equal to `target` and hands it back.
    fn withdraw(&mut self, target: &Self::Item) -> Result<Self::Item>;

    /// Whether a key equal to `target` is present.
    fn is_member(&self, target: &Self::Item) -> bool {
        self.find(target).is_ok()
    }
}

//! Binary trees built from owned, possibly empty child slots.
//!
//! [`BinaryTree`] is the plain variant: callers shape it themselves with the `attach_*` and
//! `detach_*` methods. [`crate::Bst`] and [`crate::AvlTree`] share its node layout but only
//! reshape themselves through `insert` and `withdraw`.
//!
//! # Examples
//!
//! ```
//! use adt_tree::{BinaryTree, Tree};
//!
//! let mut tree = BinaryTree::leaf('b');
//! tree.attach_left(BinaryTree::leaf('a')).unwrap();
//!
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.degree(), 1);
//!
//! // A subtree has to be detached before the slot can be reused.
//! assert!(tree.attach_left(BinaryTree::leaf('z')).is_err());
//! let a = tree.detach_left().unwrap();
//! assert_eq!(a.key(), Ok(&'a'));
//! assert!(tree.is_leaf());
//! ```

use std::mem;

use crate::error::{Result, TreeError};
use crate::stack::Stack;
use crate::tree::Tree;

/// An occupied binary node: a key and two child slots of type `C`.
#[derive(Debug, Clone)]
pub(crate) struct BinaryNode<T, C> {
    pub(crate) key: T,
    pub(crate) left: C,
    pub(crate) right: C,
}

impl<T, C: Default> BinaryNode<T, C> {
    pub(crate) fn leaf(key: T) -> Self {
        Self {
            key,
            left: C::default(),
            right: C::default(),
        }
    }
}

/// A possibly empty binary tree whose children are of its own type. `Default` must be the
/// empty tree.
pub(crate) trait BinaryLink: Default {
    type Item;

    fn node(&self) -> Option<&BinaryNode<Self::Item, Self>>;

    fn node_mut(&mut self) -> Option<&mut BinaryNode<Self::Item, Self>>;

    fn from_leaf(key: Self::Item) -> Self;

    fn into_node(self) -> Option<BinaryNode<Self::Item, Self>>;

    /// Whether [`BinaryLink::rebalance`] does anything. Trees that never rebalance are
    /// searched and reshaped without recursion, since nothing bounds their height.
    const REBALANCES: bool = false;

    /// Called on every node of a search path, bottom up, after its subtree changed.
    fn rebalance(&mut self) {}
}

pub(crate) fn child<L: BinaryLink>(link: &L, index: usize) -> Result<&L> {
    match (link.node(), index) {
        (Some(node), 0) => Ok(&node.left),
        (Some(node), 1) => Ok(&node.right),
        (node, _) => Err(TreeError::out_of_range(index, fanout(node.is_some()))),
    }
}

pub(crate) fn fanout(occupied: bool) -> usize {
    if occupied {
        2
    } else {
        0
    }
}

pub(crate) fn degree<L: BinaryLink>(link: &L) -> usize {
    link.node().map_or(0, |node| {
        usize::from(node.left.node().is_some()) + usize::from(node.right.node().is_some())
    })
}

/// The `index`th non-empty child, counting from the left.
pub(crate) fn subtree<L: BinaryLink>(link: &L, index: usize) -> Result<&L> {
    link.node()
        .into_iter()
        .flat_map(|node| [&node.left, &node.right])
        .filter(|child| child.node().is_some())
        .nth(index)
        .ok_or_else(|| TreeError::out_of_range(index, degree(link)))
}

pub(crate) fn height<L: BinaryLink>(link: &L) -> isize {
    let mut height = -1;
    let mut pending = Stack::new();
    pending.push((link, 0));
    while let Ok((link, depth)) = pending.pop() {
        if let Some(node) = link.node() {
            height = height.max(depth);
            pending.push((&node.left, depth + 1));
            pending.push((&node.right, depth + 1));
        }
    }
    height
}

/// Drops every node below `link` from a worklist, so dropping a tree costs no call stack
/// proportional to its height. `link` itself is left with two empty children.
pub(crate) fn dismantle<L: BinaryLink>(link: &mut L) {
    let Some(node) = link.node_mut() else {
        return;
    };
    if node.left.node().is_none() && node.right.node().is_none() {
        return;
    }

    let mut pending = Stack::new();
    pending.push(mem::take(&mut node.left));
    pending.push(mem::take(&mut node.right));
    while let Ok(mut link) = pending.pop() {
        if let Some(node) = link.node_mut() {
            pending.push(mem::take(&mut node.left));
            pending.push(mem::take(&mut node.right));
        }
    }
}

/// Implements [`Tree`] for a [`BinaryLink`] type. `$height` computes the height, so trees
/// that cache it can skip the walk.
macro_rules! impl_binary_tree {
    ($tree:ident, $height:expr) => {
        impl<T> $crate::tree::Tree for $tree<T> {
            type Item = T;

            fn is_empty(&self) -> bool {
                $crate::binary::BinaryLink::node(self).is_none()
            }

            fn key_count(&self) -> usize {
                usize::from(!$crate::tree::Tree::is_empty(self))
            }

            fn key_at(&self, index: usize) -> $crate::error::Result<&T> {
                match $crate::binary::BinaryLink::node(self) {
                    Some(node) if index == 0 => Ok(&node.key),
                    _ => Err($crate::error::TreeError::out_of_range(
                        index,
                        $crate::tree::Tree::key_count(self),
                    )),
                }
            }

            fn fanout(&self) -> usize {
                $crate::binary::fanout(!$crate::tree::Tree::is_empty(self))
            }

            fn child(&self, index: usize) -> $crate::error::Result<&Self> {
                $crate::binary::child(self, index)
            }

            fn degree(&self) -> usize {
                $crate::binary::degree(self)
            }

            fn subtree(&self, index: usize) -> $crate::error::Result<&Self> {
                $crate::binary::subtree(self, index)
            }

            fn purge(&mut self) {
                *self = Self::default();
            }

            fn height(&self) -> isize {
                $height(self)
            }
        }

        impl<T> $tree<T> {
            /// The left subtree, possibly empty.
            pub fn left(&self) -> $crate::error::Result<&Self> {
                $crate::binary::BinaryLink::node(self)
                    .map(|node| &node.left)
                    .ok_or($crate::error::TreeError::EmptyTree)
            }

            /// The right subtree, possibly empty.
            pub fn right(&self) -> $crate::error::Result<&Self> {
                $crate::binary::BinaryLink::node(self)
                    .map(|node| &node.right)
                    .ok_or($crate::error::TreeError::EmptyTree)
            }
        }

        impl<'a, T> IntoIterator for &'a $tree<T> {
            type Item = &'a T;
            type IntoIter = $crate::traversal::Iter<'a, $tree<T>>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::tree::Tree::iter(self)
            }
        }
    };
}
pub(crate) use impl_binary_tree;

/// A binary tree with no ordering rules: the caller decides where every key and subtree
/// goes. The empty tree is a value of this type too, so every child slot holds one.
#[derive(Debug, Clone)]
pub struct BinaryTree<T>(Option<Box<BinaryNode<T, BinaryTree<T>>>>);

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryLink for BinaryTree<T> {
    type Item = T;

    fn node(&self) -> Option<&BinaryNode<T, Self>> {
        self.0.as_deref()
    }

    fn node_mut(&mut self) -> Option<&mut BinaryNode<T, Self>> {
        self.0.as_deref_mut()
    }

    fn from_leaf(key: T) -> Self {
        Self::leaf(key)
    }

    fn into_node(mut self) -> Option<BinaryNode<T, Self>> {
        self.0.take().map(|node| *node)
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        dismantle(self);
    }
}

impl_binary_tree!(BinaryTree, height);

impl<T> BinaryTree<T> {
    /// The empty tree.
    pub fn new() -> Self {
        Self(None)
    }

    /// A single node holding `key` with two empty children.
    pub fn leaf(key: T) -> Self {
        Self(Some(Box::new(BinaryNode::leaf(key))))
    }

    /// Gives an empty tree its key, turning it into a leaf.
    pub fn attach_key(&mut self, key: T) -> Result<()> {
        if self.0.is_some() {
            return Err(TreeError::AlreadyOccupied);
        }
        *self = Self::leaf(key);
        Ok(())
    }

    /// Takes the key out of a leaf, leaving the tree empty.
    pub fn detach_key(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if !self.is_leaf() {
            return Err(TreeError::NotALeaf);
        }
        mem::take(self)
            .into_node()
            .map(|node| node.key)
            .ok_or(TreeError::EmptyTree)
    }

    /// Moves `subtree` into the empty left slot.
    pub fn attach_left(&mut self, subtree: Self) -> Result<()> {
        Self::attach(self.slot_mut(|node| &mut node.left)?, subtree)
    }

    /// Moves `subtree` into the empty right slot.
    pub fn attach_right(&mut self, subtree: Self) -> Result<()> {
        Self::attach(self.slot_mut(|node| &mut node.right)?, subtree)
    }

    /// Moves the left subtree out, leaving an empty one behind.
    pub fn detach_left(&mut self) -> Result<Self> {
        self.slot_mut(|node| &mut node.left).map(mem::take)
    }

    /// Moves the right subtree out, leaving an empty one behind.
    pub fn detach_right(&mut self) -> Result<Self> {
        self.slot_mut(|node| &mut node.right).map(mem::take)
    }

    fn slot_mut(
        &mut self,
        select: impl FnOnce(&mut BinaryNode<T, Self>) -> &mut Self,
    ) -> Result<&mut Self> {
        self.node_mut().map(select).ok_or(TreeError::EmptyTree)
    }

    fn attach(slot: &mut Self, subtree: Self) -> Result<()> {
        if !slot.is_empty() {
            return Err(TreeError::SlotOccupied);
        }
        *slot = subtree;
        Ok(())
    }
}

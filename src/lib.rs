//! This crate provides a small family of in-memory trees that all speak one
//! interface, mostly for educational purposes.
//!
//! ## Trees
//!
//! A tree is either empty or a node holding some keys and some child slots,
//! each slot holding another, possibly empty, tree of the same kind. The
//! [`Tree`] trait describes that shape and builds every traversal on top of
//! it, so the same depth-first walk, breadth-first walk and in-order
//! [`Iter`] work for all of the types below:
//!
//! 1. [`BinaryTree`]: one key, two slots, shaped by hand with `attach_*` and
//!    `detach_*`.
//! 2. [`Bst`]: a binary search tree. Every key in a node's left subtree is
//!    smaller than the node's key and every key in its right subtree larger.
//! 3. [`AvlTree`]: a binary search tree that rotates after every change so
//!    that sibling heights never differ by more than one.
//! 4. [`MWayTree`]: up to `m - 1` sorted keys and `m` slots per node. Nodes
//!    never split, so a full node rejects further inserts.
//! 5. [`GeneralTree`]: one key and any number of subtrees.
//!
//! The search trees implement [`SearchTree`] on top of that. Searching takes
//! `O(height)`, which is `O(lg N)` for the AVL tree and anything up to `O(N)`
//! for the plain BST, depending on insertion order.
//!
//! > Note that nothing here is thread-safe and none of the trees allow
//! > duplicate keys.
//!
//! ## Errors
//!
//! Every fallible operation returns a [`Result`] carrying a [`TreeError`].
//! A failed operation leaves the tree exactly as it was.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array;
pub mod avl;
pub mod binary;
pub mod bst;
pub mod error;
pub mod general;
pub mod mway;
mod search;
pub mod stack;
pub mod traversal;
pub mod tree;
pub mod visitor;


pub use array::Array;
pub use avl::AvlTree;
pub use binary::BinaryTree;
pub use bst::Bst;
pub use error::{Result, TreeError};
pub use general::GeneralTree;
pub use mway::MWayTree;
pub use stack::Stack;
pub use traversal::Iter;
pub use tree::{SearchTree, Tree};
pub use visitor::{InOrder, Order, PostOrder, PreOrder, PrePostVisitor, Visitor};

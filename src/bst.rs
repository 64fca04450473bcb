//! An unbalanced binary search tree. Its height depends entirely on insertion order: sorted
//! input degrades it to a list.
//!
//! # Examples
//!
//! ```
//! use adt_tree::{Bst, SearchTree, Tree, TreeError};
//!
//! let mut tree = Bst::new();
//! for key in [5, 2, 8] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert_eq!(tree.find(&2), Ok(&2));
//! assert_eq!(tree.insert(8), Err(TreeError::DuplicateKey));
//!
//! // Withdrawing hands the element back.
//! assert_eq!(tree.withdraw(&5), Ok(5));
//! assert!(!tree.is_member(&5));
//! ```

use crate::binary::{self, impl_binary_tree, BinaryLink, BinaryNode};
use crate::error::Result;
use crate::search;
use crate::tree::SearchTree;

/// A binary search tree: every key in a node's left subtree is smaller than the node's key
/// and every key in its right subtree is larger. Keys are unique.
#[derive(Debug, Clone)]
pub struct Bst<T>(Option<Box<BinaryNode<T, Bst<T>>>>);

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bst<T> {
    /// Generate a new, empty `Bst`.
    pub fn new() -> Self {
        Self(None)
    }
}

impl<T> BinaryLink for Bst<T> {
    type Item = T;

    fn node(&self) -> Option<&BinaryNode<T, Self>> {
        self.0.as_deref()
    }

    fn node_mut(&mut self) -> Option<&mut BinaryNode<T, Self>> {
        self.0.as_deref_mut()
    }

    fn from_leaf(key: T) -> Self {
        Self(Some(Box::new(BinaryNode::leaf(key))))
    }

    fn into_node(mut self) -> Option<BinaryNode<T, Self>> {
        self.0.take().map(|node| *node)
    }
}

impl<T> Drop for Bst<T> {
    fn drop(&mut self) {
        binary::dismantle(self);
    }
}

impl_binary_tree!(Bst, binary::height);

impl<T: Ord> SearchTree for Bst<T> {
    fn find(&self, target: &T) -> Result<&T> {
        search::find(self, target)
    }

    fn find_min(&self) -> Result<&T> {
        search::find_min(self)
    }

    fn find_max(&self) -> Result<&T> {
        search::find_max(self)
    }

    fn insert(&mut self, key: T) -> Result<()> {
        search::insert(self, key)
    }

    fn withdraw(&mut self, target: &T) -> Result<T> {
        search::withdraw(self, target)
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    /// Inserts every element in order, skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            let _ = tree.insert(key);
        }
        tree
    }
}

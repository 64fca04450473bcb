//! A tree whose nodes carry one key and any number of subtrees.
//!
//! # Examples
//!
//! ```
//! use adt_tree::{GeneralTree, Order, Tree};
//!
//! let mut root = GeneralTree::leaf("root");
//! let mut docs = GeneralTree::leaf("docs");
//! docs.attach_subtree(GeneralTree::leaf("guide")).unwrap();
//! root.attach_subtree(docs).unwrap();
//! root.attach_subtree(GeneralTree::leaf("src")).unwrap();
//!
//! let mut names = Vec::new();
//! root.walk(Order::PreOrder, |name: &&str| names.push(*name));
//! assert_eq!(names, ["root", "docs", "guide", "src"]);
//! assert_eq!(root.degree(), 2);
//! ```

use crate::error::{Result, TreeError};
use crate::tree::Tree;

#[derive(Debug, Clone)]
struct GeneralNode<T> {
    key: T,
    subtrees: Vec<GeneralTree<T>>,
}

/// A possibly empty tree whose nodes have an unbounded number of ordered subtrees. Every
/// attached subtree is non-empty.
#[derive(Debug, Clone)]
pub struct GeneralTree<T>(Option<Box<GeneralNode<T>>>);

impl<T> Default for GeneralTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GeneralTree<T> {
    /// The empty tree.
    pub fn new() -> Self {
        Self(None)
    }

    /// A node holding `key` and no subtrees.
    pub fn leaf(key: T) -> Self {
        Self(Some(Box::new(GeneralNode {
            key,
            subtrees: Vec::new(),
        })))
    }

    /// Appends `subtree` after the existing subtrees of this node.
    pub fn attach_subtree(&mut self, subtree: Self) -> Result<()> {
        if subtree.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let node = self.0.as_deref_mut().ok_or(TreeError::EmptyTree)?;
        node.subtrees.push(subtree);
        Ok(())
    }

    /// Removes the `index`th subtree, shifting later ones left, and hands it back.
    pub fn detach_subtree(&mut self, index: usize) -> Result<Self> {
        let node = self.0.as_deref_mut().ok_or(TreeError::EmptyTree)?;
        if index >= node.subtrees.len() {
            return Err(TreeError::out_of_range(index, node.subtrees.len()));
        }
        Ok(node.subtrees.remove(index))
    }
}

impl<T> Tree for GeneralTree<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn key_count(&self) -> usize {
        usize::from(!self.is_empty())
    }

    fn key_at(&self, index: usize) -> Result<&T> {
        match self.0.as_deref() {
            Some(node) if index == 0 => Ok(&node.key),
            _ => Err(TreeError::out_of_range(index, self.key_count())),
        }
    }

    fn fanout(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.subtrees.len())
    }

    fn child(&self, index: usize) -> Result<&Self> {
        self.0
            .as_deref()
            .and_then(|node| node.subtrees.get(index))
            .ok_or_else(|| TreeError::out_of_range(index, self.fanout()))
    }

    fn degree(&self) -> usize {
        self.fanout()
    }

    fn subtree(&self, index: usize) -> Result<&Self> {
        self.child(index)
    }

    fn purge(&mut self) {
        self.0 = None;
    }
}

impl<'a, T> IntoIterator for &'a GeneralTree<T> {
    type Item = &'a T;
    type IntoIter = crate::traversal::Iter<'a, GeneralTree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! A self-balancing binary search tree (specifically, an AVL tree).
//!
//! Every node caches its height. After an insert or withdraw, each node on the search path
//! recomputes its height on the way back up and, if its children's heights differ by more
//! than one, rotates. See [the Wikipedia page][wiki] for the terminology.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
//!
//! # Examples
//!
//! ```
//! use adt_tree::{AvlTree, SearchTree, Tree};
//!
//! let mut tree = AvlTree::new();
//! for key in 0..1000 {
//!     tree.insert(key).unwrap();
//! }
//!
//! // Sorted input still gives a shallow tree.
//! assert!(tree.height() < 15);
//! assert_eq!(tree.find_max(), Ok(&999));
//! ```

use std::mem;

use tracing::trace;

use crate::binary::{impl_binary_tree, BinaryLink, BinaryNode};
use crate::error::Result;
use crate::search;
use crate::tree::SearchTree;

/// An AVL tree. On top of the search tree ordering, the heights of the two subtrees of any
/// node differ by at most one, which bounds the height by roughly `1.44 * log2(n)`.
#[derive(Debug, Clone)]
pub struct AvlTree<T>(Option<Box<AvlNode<T>>>);

#[derive(Debug, Clone)]
struct AvlNode<T> {
    node: BinaryNode<T, AvlTree<T>>,

    /// Edges on the longest path down from this node. A leaf has a height of 0.
    height: isize,
}

impl<T> AvlNode<T> {
    /// Recomputes the height from the children's cached heights.
    fn adjust_height(&mut self) {
        self.height = self.node.left.cached_height().max(self.node.right.cached_height()) + 1;
    }

    fn balance_factor(&self) -> isize {
        self.node.left.cached_height() - self.node.right.cached_height()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    /// Generate a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self(None)
    }

    fn cached_height(&self) -> isize {
        self.0.as_ref().map_or(-1, |node| node.height)
    }

    /// Height of the left subtree minus height of the right subtree. Zero when empty.
    pub(crate) fn balance_factor(&self) -> isize {
        self.0.as_ref().map_or(0, |node| node.balance_factor())
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Does nothing without a left child.
    ///
    /// ```text
    ///       old_root              pivot
    ///        /     \              /    \
    ///     pivot     z    ->      x   old_root
    ///     /   \                       /   \
    ///    x     y                     y     z
    /// ```
    fn rotate_right(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut pivot) = old_root.node.left.0.take() else {
            self.0 = Some(old_root);
            return;
        };

        old_root.node.left = mem::take(&mut pivot.node.right);
        old_root.adjust_height();

        pivot.node.right = Self(Some(old_root));
        pivot.adjust_height();
        self.0 = Some(pivot);
    }

    /// The mirror image of [`AvlTree::rotate_right`].
    fn rotate_left(&mut self) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut pivot) = old_root.node.right.0.take() else {
            self.0 = Some(old_root);
            return;
        };

        old_root.node.right = mem::take(&mut pivot.node.left);
        old_root.adjust_height();

        pivot.node.left = Self(Some(old_root));
        pivot.adjust_height();
        self.0 = Some(pivot);
    }

    fn ll_rotation(&mut self) {
        self.rotate_right();
    }

    fn lr_rotation(&mut self) {
        if let Some(root) = self.0.as_mut() {
            root.node.left.rotate_left();
        }
        self.rotate_right();
    }

    fn rr_rotation(&mut self) {
        self.rotate_left();
    }

    fn rl_rotation(&mut self) {
        if let Some(root) = self.0.as_mut() {
            root.node.right.rotate_right();
        }
        self.rotate_left();
    }
}

impl<T> BinaryLink for AvlTree<T> {
    type Item = T;

    fn node(&self) -> Option<&BinaryNode<T, Self>> {
        self.0.as_ref().map(|avl| &avl.node)
    }

    fn node_mut(&mut self) -> Option<&mut BinaryNode<T, Self>> {
        self.0.as_mut().map(|avl| &mut avl.node)
    }

    fn from_leaf(key: T) -> Self {
        Self(Some(Box::new(AvlNode {
            node: BinaryNode::leaf(key),
            height: 0,
        })))
    }

    fn into_node(self) -> Option<BinaryNode<T, Self>> {
        self.0.map(|avl| avl.node)
    }

    const REBALANCES: bool = true;

    fn rebalance(&mut self) {
        let Some(root) = self.0.as_mut() else {
            return;
        };
        root.adjust_height();

        let balance_factor = root.balance_factor();
        if balance_factor > 1 {
            if root.node.left.balance_factor() >= 0 {
                trace!(balance_factor, "LL rotation");
                self.ll_rotation();
            } else {
                trace!(balance_factor, "LR rotation");
                self.lr_rotation();
            }
        } else if balance_factor < -1 {
            if root.node.right.balance_factor() <= 0 {
                trace!(balance_factor, "RR rotation");
                self.rr_rotation();
            } else {
                trace!(balance_factor, "RL rotation");
                self.rl_rotation();
            }
        }

        if cfg!(debug_assertions) {
            if let Some(root) = self.0.as_ref() {
                assert!(root.balance_factor().abs() <= 1);
            }
        }
    }
}

impl_binary_tree!(AvlTree, AvlTree::cached_height);

impl<T: Ord> SearchTree for AvlTree<T> {
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

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    /// Inserts every element in order, skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            let _ = tree.insert(key);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use crate::tree::Tree;

    /// Checks ordering, cached heights, and balance of every node, returning the height.
    fn check<T: Ord>(tree: &AvlTree<T>, low: Option<&T>, high: Option<&T>) -> isize {
        let Some(avl) = tree.0.as_ref() else {
            return -1;
        };
        let key = &avl.node.key;
        assert!(low.map_or(true, |low| low < key));
        assert!(high.map_or(true, |high| key < high));

        let left = check(&avl.node.left, low, Some(key));
        let right = check(&avl.node.right, Some(key), high);
        assert!((left - right).abs() <= 1, "unbalanced node");
        assert_eq!(avl.height, left.max(right) + 1, "stale cached height");
        avl.height
    }

    /// Assert the heights of the root, left child, and right child of a tree.
    macro_rules! assert_heights {
        ($tree:ident, $height:expr, $left_height:expr, $right_height:expr) => {{
            assert_eq!($tree.height(), $height);
            assert_eq!($tree.left().unwrap().height(), $left_height);
            assert_eq!($tree.right().unwrap().height(), $right_height);
        }};
    }

    fn root_and_children(tree: &AvlTree<i32>) -> (i32, i32, i32) {
        (
            *tree.key().unwrap(),
            *tree.left().and_then(Tree::key).unwrap(),
            *tree.right().and_then(Tree::key).unwrap(),
        )
    }

    #[test_log::test]
    fn always_adding_left() {
        let tree: AvlTree<i32> = (1..=3).rev().collect();

        assert_eq!(root_and_children(&tree), (2, 1, 3));
        assert_heights!(tree, 1, 0, 0);
    }

    #[test_log::test]
    fn always_adding_right() {
        let tree: AvlTree<i32> = (1..=3).collect();

        assert_eq!(root_and_children(&tree), (2, 1, 3));
        assert_heights!(tree, 1, 0, 0);
    }

    #[test_log::test]
    fn test_left_right_rebalance() {
        let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();

        assert_eq!(root_and_children(&tree), (2, 1, 3));
        check(&tree, None, None);
    }

    #[test_log::test]
    fn test_right_left_rebalance() {
        let tree: AvlTree<i32> = [1, 3, 2].into_iter().collect();

        assert_eq!(root_and_children(&tree), (2, 1, 3));
        check(&tree, None, None);
    }

    #[test]
    fn empty_tree() {
        let mut tree: AvlTree<i32> = AvlTree::new();

        assert_eq!(tree.height(), -1);
        assert_eq!(tree.balance_factor(), 0);
        assert_eq!(tree.withdraw(&1), Err(TreeError::KeyNotFound));
        assert_eq!(tree.find_min(), Err(TreeError::EmptyTree));
    }

    #[test]
    fn duplicate_insert_leaves_heights_alone() {
        let mut tree: AvlTree<i32> = (0..7).collect();

        assert_eq!(tree.insert(3), Err(TreeError::DuplicateKey));
        assert_eq!(check(&tree, None, None), 2);
        assert_eq!(tree.count(), 7);
    }

    #[test]
    fn withdraw_rebalances() {
        //     2
        //    / \
        //   1   3
        //        \
        //         4
        let mut tree: AvlTree<i32> = [2, 1, 3, 4].into_iter().collect();

        // Removing 1 leaves 2 right-heavy by two: an RR rotation lifts 3.
        assert_eq!(tree.withdraw(&1), Ok(1));
        assert_eq!(root_and_children(&tree), (3, 2, 4));
        check(&tree, None, None);
    }

    #[test]
    fn withdraw_two_children_rebalances_the_right_path() {
        let mut tree: AvlTree<i32> = [5, 3, 8, 2, 4, 7, 9, 1].into_iter().collect();

        assert_eq!(tree.withdraw(&5), Ok(5));
        assert_eq!(tree.key(), Ok(&7));
        check(&tree, None, None);

        assert_eq!(tree.withdraw(&7), Ok(7));
        check(&tree, None, None);
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            [1, 2, 3, 4, 8, 9]
        );
    }

    #[test]
    fn quickcheck_found_invalid_height_after_deletion() {
        let mut tree = AvlTree::new();

        for key in [77, -22, 0, -127, 5, 109, -58, -105, -65, -86, 45, -11, -39] {
            tree.insert(key).unwrap();
        }
        tree.withdraw(&0).unwrap();
        assert_eq!(tree.withdraw(&-122), Err(TreeError::KeyNotFound));
        check(&tree, None, None);
    }

    #[test]
    fn quickcheck_found_invalid_height_after_deletion2() {
        let mut tree = AvlTree::new();

        for key in [-49, -107, 127, -22, -77, -128, -119, -69, -122, 109, 115, -118] {
            tree.insert(key).unwrap();
        }
        tree.withdraw(&-49).unwrap();
        tree.withdraw(&-77).unwrap();
        check(&tree, None, None);
    }
}

//! An m-way search tree: each node holds up to `m - 1` ascending keys and `m` child slots.
//!
//! Keys below `keys[i]` live under `children[i]` and keys above it under `children[i + 1]`.
//! A node never splits. Once it holds `m - 1` keys, inserting a key that would land in the
//! node itself fails with [`TreeError::NodeOverflow`]. Deeper levels are built by attaching
//! subtrees with [`MWayTree::attach_subtree`]; inserts whose slot already holds a subtree
//! descend into it.
//!
//! # Examples
//!
//! ```
//! use adt_tree::{MWayTree, SearchTree, Tree, TreeError};
//!
//! let mut tree = MWayTree::new(4).unwrap();
//! for key in [20, 10, 30] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.key_count(), 3);
//! assert_eq!(tree.insert(40), Err(TreeError::NodeOverflow { capacity: 3 }));
//!
//! // A subtree can hang between 10 and 20.
//! let mut child = MWayTree::new(4).unwrap();
//! child.insert(15).unwrap();
//! tree.attach_subtree(1, child).unwrap();
//!
//! tree.insert(12).unwrap();
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 12, 15, 20, 30]);
//! assert_eq!(tree.height(), 1);
//! ```

use tracing::debug;

use crate::array::Array;
use crate::error::{Result, TreeError};
use crate::tree::{SearchTree, Tree};

/// A node of an m-way search tree, or an empty tree of order `m`.
#[derive(Debug, Clone)]
pub struct MWayTree<T> {
    m: usize,
    num_of_keys: usize,
    /// `keys[0..num_of_keys]` are `Some` and ascending; the rest are `None`.
    keys: Array<Option<T>>,
    /// `children[0..=num_of_keys]` are the live slots; the rest are empty trees.
    children: Array<MWayTree<T>>,
}

impl<T> MWayTree<T> {
    /// An empty tree whose nodes hold at most `m - 1` keys. Requires `m >= 2`.
    pub fn new(m: usize) -> Result<Self> {
        if m < 2 {
            return Err(TreeError::InvalidOrder { order: m });
        }
        Ok(Self::empty(m))
    }

    /// An empty node. Its arrays stay unallocated until the first key arrives.
    fn empty(m: usize) -> Self {
        Self {
            m,
            num_of_keys: 0,
            keys: Array::default(),
            children: Array::default(),
        }
    }

    /// The order `m` of this tree.
    pub fn order(&self) -> usize {
        self.m
    }

    /// Maximum number of keys a node holds, `m - 1`.
    pub fn capacity(&self) -> usize {
        self.m - 1
    }

    /// Whether this node has no room for another key.
    pub fn is_full(&self) -> bool {
        self.num_of_keys == self.capacity()
    }

    /// Turns an empty node into one holding just `key`.
    fn occupy(&mut self, key: T) -> Result<()> {
        let m = self.m;
        self.keys.set_length(m - 1);
        self.children.set_length_with(m, || Self::empty(m));
        self.keys.set(0, Some(key))?;
        self.num_of_keys = 1;
        Ok(())
    }

    /// The smallest `i` with `keys[i] >= target`, or `num_of_keys` if every key is smaller.
    pub fn find_index(&self, target: &T) -> Result<usize>
    where
        T: Ord,
    {
        let (mut low, mut high) = (0, self.num_of_keys);
        while low < high {
            let middle = low + (high - low) / 2;
            if self.key_at(middle)? < target {
                low = middle + 1;
            } else {
                high = middle;
            }
        }
        Ok(low)
    }

    /// Moves `subtree` into the empty slot `index` of this node.
    ///
    /// The subtree must have the same order as this tree and its keys must lie strictly
    /// between the keys on either side of the slot.
    pub fn attach_subtree(&mut self, index: usize, subtree: Self) -> Result<()>
    where
        T: Ord,
    {
        self.check_slot(index)?;
        if subtree.m != self.m {
            return Err(TreeError::InvalidOrder { order: subtree.m });
        }
        if !self.children.get(index)?.is_empty() {
            return Err(TreeError::SlotOccupied);
        }
        if !subtree.is_empty() {
            let above_low = index == 0 || self.key_at(index - 1)? < subtree.find_min()?;
            let below_high =
                index == self.num_of_keys || subtree.find_max()? < self.key_at(index)?;
            if !(above_low && below_high) {
                return Err(TreeError::OrderViolation);
            }
        }
        self.children.set(index, subtree)?;
        Ok(())
    }

    /// Moves the subtree in slot `index` out, leaving an empty one behind.
    pub fn detach_subtree(&mut self, index: usize) -> Result<Self> {
        self.check_slot(index)?;
        let m = self.m;
        self.children.set(index, Self::empty(m))
    }

    fn check_slot(&self, index: usize) -> Result<()> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if index > self.num_of_keys {
            return Err(TreeError::out_of_range(index, self.num_of_keys + 1));
        }
        Ok(())
    }

    /// Removes `keys[index]` together with the empty slot `slot`, which must be `index` or
    /// `index + 1`, shifting everything above them left. A node left without keys is
    /// replaced by its remaining child.
    fn remove(&mut self, index: usize, slot: usize) -> Result<T> {
        let m = self.m;
        let key = self.keys.set(index, None)?.ok_or(TreeError::KeyNotFound)?;
        for i in index + 1..self.num_of_keys {
            let moved = self.keys.set(i, None)?;
            self.keys.set(i - 1, moved)?;
        }
        for i in slot + 1..=self.num_of_keys {
            let moved = self.children.set(i, Self::empty(m))?;
            self.children.set(i - 1, moved)?;
        }
        self.num_of_keys -= 1;

        if self.num_of_keys == 0 {
            let remaining = self.children.set(0, Self::empty(m))?;
            *self = if remaining.is_empty() {
                Self::empty(m)
            } else {
                remaining
            };
        }
        Ok(key)
    }

    /// Removes the largest key of this subtree.
    fn withdraw_max(&mut self) -> Result<T> {
        let mut tree = self;
        loop {
            if tree.is_empty() {
                return Err(TreeError::EmptyTree);
            }
            let last = tree.num_of_keys;
            if tree.children.get(last)?.is_empty() {
                return tree.remove(last - 1, last);
            }
            tree = tree.children.get_mut(last)?;
        }
    }

    /// Puts `key` at `index` of this node, shifting larger keys and their right slots up.
    fn insert_at(&mut self, index: usize, key: T) -> Result<()> {
        if self.is_full() {
            debug!(capacity = self.capacity(), "m-way node full, rejecting insert");
            return Err(TreeError::NodeOverflow {
                capacity: self.capacity(),
            });
        }

        let m = self.m;
        for i in (index..self.num_of_keys).rev() {
            let moved = self.keys.set(i, None)?;
            self.keys.set(i + 1, moved)?;
        }
        self.keys.set(index, Some(key))?;
        for i in (index + 1..=self.num_of_keys).rev() {
            let moved = self.children.set(i, Self::empty(m))?;
            self.children.set(i + 1, moved)?;
        }
        self.num_of_keys += 1;
        Ok(())
    }

    /// Removes `keys[index]`, keeping whichever neighbouring slot holds a subtree.
    fn withdraw_at(&mut self, index: usize) -> Result<T> {
        if self.children.get(index)?.is_empty() {
            self.remove(index, index)
        } else if self.children.get(index + 1)?.is_empty() {
            self.remove(index, index + 1)
        } else {
            debug!("replacing withdrawn m-way key with its predecessor");
            let predecessor = self.children.get_mut(index)?.withdraw_max()?;
            self.keys
                .set(index, Some(predecessor))?
                .ok_or(TreeError::KeyNotFound)
        }
    }
}

impl<T> Tree for MWayTree<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.num_of_keys == 0
    }

    fn key_count(&self) -> usize {
        self.num_of_keys
    }

    fn key_at(&self, index: usize) -> Result<&T> {
        let out_of_range = TreeError::out_of_range(index, self.num_of_keys);
        if index >= self.num_of_keys {
            return Err(out_of_range);
        }
        self.keys.get(index)?.as_ref().ok_or(out_of_range)
    }

    fn fanout(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.num_of_keys + 1
        }
    }

    fn child(&self, index: usize) -> Result<&Self> {
        if index >= self.fanout() {
            return Err(TreeError::out_of_range(index, self.fanout()));
        }
        self.children.get(index)
    }

    fn degree(&self) -> usize {
        self.fanout()
    }

    fn subtree(&self, index: usize) -> Result<&Self> {
        self.child(index)
    }

    fn purge(&mut self) {
        *self = Self::empty(self.m);
    }
}

impl<T: Ord> SearchTree for MWayTree<T> {
    fn find(&self, target: &T) -> Result<&T> {
        let mut tree = self;
        while !tree.is_empty() {
            let index = tree.find_index(target)?;
            if let Ok(key) = tree.key_at(index) {
                if key == target {
                    return Ok(key);
                }
            }
            tree = tree.children.get(index)?;
        }
        Err(TreeError::KeyNotFound)
    }

    fn find_min(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let mut tree = self;
        loop {
            let first = tree.children.get(0)?;
            if first.is_empty() {
                return tree.key_at(0);
            }
            tree = first;
        }
    }

    fn find_max(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let mut tree = self;
        loop {
            let last = tree.children.get(tree.num_of_keys)?;
            if last.is_empty() {
                return tree.key_at(tree.num_of_keys - 1);
            }
            tree = last;
        }
    }

    fn insert(&mut self, key: T) -> Result<()> {
        if self.is_empty() {
            return self.occupy(key);
        }

        let mut tree = self;
        loop {
            let index = tree.find_index(&key)?;
            if let Ok(existing) = tree.key_at(index) {
                if *existing == key {
                    return Err(TreeError::DuplicateKey);
                }
            }
            if tree.children.get(index)?.is_empty() {
                return tree.insert_at(index, key);
            }
            tree = tree.children.get_mut(index)?;
        }
    }

    fn withdraw(&mut self, target: &T) -> Result<T> {
        let mut tree = self;
        loop {
            if tree.is_empty() {
                return Err(TreeError::KeyNotFound);
            }
            let index = tree.find_index(target)?;
            if matches!(tree.key_at(index), Ok(key) if key == target) {
                return tree.withdraw_at(index);
            }
            tree = tree.children.get_mut(index)?;
        }
    }
}

impl<'a, T> IntoIterator for &'a MWayTree<T> {
    type Item = &'a T;
    type IntoIter = crate::traversal::Iter<'a, MWayTree<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

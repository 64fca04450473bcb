//! Binary search logic shared by [`crate::Bst`] and [`crate::AvlTree`].
//!
//! Trees that rebalance recurse down the search path and call [`BinaryLink::rebalance`] on
//! each node on the way back up; their height is logarithmic, so the recursion is shallow.
//! Trees that never rebalance can degrade into a list, so they walk a cursor down the path
//! instead and use no call stack proportional to their height.

use std::cmp::Ordering;
use std::mem;

use tracing::debug;

use crate::binary::{BinaryLink, BinaryNode};
use crate::error::{Result, TreeError};

pub(crate) fn find<'a, L>(mut link: &'a L, target: &L::Item) -> Result<&'a L::Item>
where
    L: BinaryLink,
    L::Item: Ord,
{
    while let Some(node) = link.node() {
        link = match target.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Equal => return Ok(&node.key),
            Ordering::Greater => &node.right,
        };
    }
    Err(TreeError::KeyNotFound)
}

pub(crate) fn find_min<L: BinaryLink>(link: &L) -> Result<&L::Item> {
    let mut node = link.node().ok_or(TreeError::EmptyTree)?;
    while let Some(left) = node.left.node() {
        node = left;
    }
    Ok(&node.key)
}

pub(crate) fn find_max<L: BinaryLink>(link: &L) -> Result<&L::Item> {
    let mut node = link.node().ok_or(TreeError::EmptyTree)?;
    while let Some(right) = node.right.node() {
        node = right;
    }
    Ok(&node.key)
}

/// Hangs a new leaf holding `key` off the first empty slot of its search path.
pub(crate) fn insert<L>(link: &mut L, key: L::Item) -> Result<()>
where
    L: BinaryLink,
    L::Item: Ord,
{
    if L::REBALANCES {
        insert_rebalancing(link, key)
    } else {
        insert_in_place(link, key)
    }
}

/// Removes the node holding `target`.
///
/// A node with two children keeps its place: its in-order successor is first removed
/// from the right subtree and then takes over the withdrawn key's spot, so there is never
/// a moment with two equal keys in the tree.
pub(crate) fn withdraw<L>(link: &mut L, target: &L::Item) -> Result<L::Item>
where
    L: BinaryLink,
    L::Item: Ord,
{
    if L::REBALANCES {
        withdraw_rebalancing(link, target)
    } else {
        withdraw_in_place(link, target)
    }
}

fn insert_rebalancing<L>(link: &mut L, key: L::Item) -> Result<()>
where
    L: BinaryLink,
    L::Item: Ord,
{
    let Some(node) = link.node_mut() else {
        *link = L::from_leaf(key);
        return Ok(());
    };
    match key.cmp(&node.key) {
        Ordering::Less => insert_rebalancing(&mut node.left, key)?,
        Ordering::Equal => return Err(TreeError::DuplicateKey),
        Ordering::Greater => insert_rebalancing(&mut node.right, key)?,
    }
    link.rebalance();
    Ok(())
}

fn insert_in_place<L>(mut link: &mut L, key: L::Item) -> Result<()>
where
    L: BinaryLink,
    L::Item: Ord,
{
    loop {
        let ordering = match link.node() {
            Some(node) => key.cmp(&node.key),
            None => break,
        };
        let node = link.node_mut().ok_or(TreeError::KeyNotFound)?;
        link = match ordering {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return Err(TreeError::DuplicateKey),
            Ordering::Greater => &mut node.right,
        };
    }
    *link = L::from_leaf(key);
    Ok(())
}

fn withdraw_rebalancing<L>(link: &mut L, target: &L::Item) -> Result<L::Item>
where
    L: BinaryLink,
    L::Item: Ord,
{
    let node = link.node_mut().ok_or(TreeError::KeyNotFound)?;
    let removed = match target.cmp(&node.key) {
        Ordering::Less => withdraw_rebalancing(&mut node.left, target)?,
        Ordering::Greater => withdraw_rebalancing(&mut node.right, target)?,
        Ordering::Equal if node.left.node().is_some() && node.right.node().is_some() => {
            debug!("withdrawing a node with two children");
            let successor = withdraw_min_rebalancing(&mut node.right)?;
            mem::replace(&mut node.key, successor)
        }
        Ordering::Equal => splice(link)?,
    };
    link.rebalance();
    Ok(removed)
}

fn withdraw_in_place<L>(mut link: &mut L, target: &L::Item) -> Result<L::Item>
where
    L: BinaryLink,
    L::Item: Ord,
{
    loop {
        let node = link.node().ok_or(TreeError::KeyNotFound)?;
        let ordering = target.cmp(&node.key);
        if ordering == Ordering::Equal {
            break;
        }
        let node = link.node_mut().ok_or(TreeError::KeyNotFound)?;
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    let node = link.node_mut().ok_or(TreeError::KeyNotFound)?;
    if node.left.node().is_some() && node.right.node().is_some() {
        debug!("withdrawing a node with two children");
        let successor = withdraw_min_in_place(&mut node.right)?;
        return Ok(mem::replace(&mut node.key, successor));
    }
    splice(link)
}

/// Removes the leftmost node, splicing its right subtree into its place.
fn withdraw_min_rebalancing<L: BinaryLink>(link: &mut L) -> Result<L::Item> {
    let node = link.node_mut().ok_or(TreeError::EmptyTree)?;
    let removed = if node.left.node().is_some() {
        withdraw_min_rebalancing(&mut node.left)?
    } else {
        splice(link)?
    };
    link.rebalance();
    Ok(removed)
}

/// Removes the leftmost node, splicing its right subtree into its place.
fn withdraw_min_in_place<L: BinaryLink>(mut link: &mut L) -> Result<L::Item> {
    while link
        .node()
        .ok_or(TreeError::EmptyTree)?
        .left
        .node()
        .is_some()
    {
        link = &mut link.node_mut().ok_or(TreeError::EmptyTree)?.left;
    }
    splice(link)
}

/// Takes the key out of a node with at most one child and moves that child up.
fn splice<L: BinaryLink>(link: &mut L) -> Result<L::Item> {
    let BinaryNode { key, left, right } = mem::take(link)
        .into_node()
        .ok_or(TreeError::KeyNotFound)?;
    *link = if left.node().is_some() { left } else { right };
    Ok(key)
}

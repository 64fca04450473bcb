//! Depth-first and breadth-first walks over any [`Tree`], and the restartable in-order
//! [`Iter`].
//!
//! None of these recurse. The depth-first walk and the iterator keep a [`Stack`] of
//! frames, one per node on the path from the root, each remembering how many of the
//! node's steps have been taken. Step `s` of a node with `n` keys and `f` child slots
//! first passes key `s - 1` (when `1 <= s <= n`) and then descends into slot `s` (when
//! `s < f`). A node has `max(n + 1, f)` steps, which covers binary and m-way nodes
//! (`f == n + 1`) as well as general tree leaves (`f == 0`).
//!
//! # Examples
//!
//! ```
//! use adt_tree::{AvlTree, SearchTree, Tree};
//!
//! let mut tree = AvlTree::new();
//! for key in [7, 3, 9, 1] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let mut iter = tree.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&3));
//!
//! // Start over from the smallest key.
//! iter.reset();
//! assert_eq!(iter.copied().collect::<Vec<_>>(), [1, 3, 7, 9]);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use crate::stack::Stack;
use crate::tree::Tree;
use crate::visitor::{PrePostVisitor, Visitor};

/// A node on the explicit stack and the next step to take in it.
struct Frame<'a, N> {
    node: &'a N,
    step: usize,
}

impl<N> Clone for Frame<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<N> Copy for Frame<'_, N> {}

impl<'a, N: Tree> Frame<'a, N> {
    fn new(node: &'a N) -> Self {
        Self { node, step: 0 }
    }

    fn steps(&self) -> usize {
        (self.node.key_count() + 1).max(self.node.fanout())
    }

    /// The key passed at `step`, if any.
    fn key(&self, step: usize) -> Option<&'a N::Item> {
        if step == 0 {
            return None;
        }
        self.node.key_at(step - 1).ok()
    }

    /// The non-empty subtree descended into at `step`, if any.
    fn child(&self, step: usize) -> Option<&'a N> {
        self.node.child(step).ok().filter(|child| !child.is_empty())
    }
}

pub(crate) fn depth_first<N, V>(root: &N, visitor: &mut V)
where
    N: Tree,
    V: PrePostVisitor<N::Item>,
{
    let mut stack = Stack::new();
    enter(root, &mut stack, visitor);

    while let Ok(frame) = stack.pop() {
        if visitor.is_done() {
            return;
        }

        let step = frame.step;
        if step == frame.steps() {
            for key in keys(frame.node).rev() {
                if visitor.is_done() {
                    return;
                }
                visitor.post_visit(key);
            }
            continue;
        }

        stack.push(Frame {
            step: step + 1,
            ..frame
        });
        if let Some(key) = frame.key(step) {
            visitor.in_visit(key);
        }
        if let Some(child) = frame.child(step) {
            enter(child, &mut stack, visitor);
        }
    }
}

fn enter<'a, N, V>(node: &'a N, stack: &mut Stack<Frame<'a, N>>, visitor: &mut V)
where
    N: Tree,
    V: PrePostVisitor<N::Item>,
{
    if node.is_empty() {
        return;
    }
    for key in keys(node) {
        if visitor.is_done() {
            return;
        }
        visitor.pre_visit(key);
    }
    stack.push(Frame::new(node));
}

/// The keys of a single node, in order.
fn keys<N: Tree>(node: &N) -> impl DoubleEndedIterator<Item = &N::Item> {
    (0..node.key_count()).filter_map(|i| node.key_at(i).ok())
}

pub(crate) fn breadth_first<N, V>(root: &N, visitor: &mut V)
where
    N: Tree,
    V: Visitor<N::Item>,
{
    let mut queue = VecDeque::new();
    if !root.is_empty() {
        queue.push_back(root);
    }

    while let Some(node) = queue.pop_front() {
        for key in keys(node) {
            if visitor.is_done() {
                return;
            }
            visitor.visit(key);
        }
        let children = (0..node.fanout()).filter_map(|slot| node.child(slot).ok());
        queue.extend(children.filter(|child| !child.is_empty()));
    }
}

/// In-order iterator over the keys of a tree. Created by [`Tree::iter`].
///
/// The iterator borrows the tree, so the tree cannot change while it is alive.
/// [`Iter::reset`] rewinds it to the smallest key without re-borrowing.
pub struct Iter<'a, N> {
    root: &'a N,
    stack: Stack<Frame<'a, N>>,
}

impl<N> fmt::Debug for Iter<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("depth", &self.stack.len())
            .finish()
    }
}

impl<'a, N: Tree> Iter<'a, N> {
    pub(crate) fn new(root: &'a N) -> Self {
        let mut iter = Self {
            root,
            stack: Stack::new(),
        };
        iter.reset();
        iter
    }

    /// Discards the current position and starts again from the first key.
    pub fn reset(&mut self) {
        self.stack.purge();
        self.descend(self.root);
    }

    /// Whether every key has been returned.
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pushes `node` and the first slot of every node below it, stopping at an empty slot.
    /// Each pushed frame has already taken its step 0.
    fn descend(&mut self, node: &'a N) {
        let mut next = Some(node).filter(|node| !node.is_empty());
        while let Some(node) = next {
            let frame = Frame { node, step: 1 };
            next = frame.child(0);
            self.push(frame);
        }
    }

    /// Pushes `frame` unless it has no steps left.
    fn push(&mut self, frame: Frame<'a, N>) {
        if frame.step < frame.steps() {
            self.stack.push(frame);
        }
    }
}

impl<'a, N: Tree> Iterator for Iter<'a, N> {
    type Item = &'a N::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.pop().ok()?;
            let step = frame.step;
            self.push(Frame {
                step: step + 1,
                ..frame
            });
            let key = frame.key(step);
            if let Some(child) = frame.child(step) {
                self.descend(child);
            }
            if key.is_some() {
                return key;
            }
        }
    }
}

impl<N: Tree> FusedIterator for Iter<'_, N> {}

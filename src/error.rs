//! The error type shared by every tree, array and stack in this crate.

use thiserror::Error;

/// Result type alias using [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Everything that can go wrong when reading or reshaping a tree. None of these are fatal:
/// each one is reported before any structural change is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A key, minimum, maximum or child was requested from an empty tree.
    #[error("tree is empty")]
    EmptyTree,

    /// An index fell outside `start..end`.
    #[error("index {index} outside valid range {start}..{end}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// First valid index.
        start: usize,
        /// One past the last valid index.
        end: usize,
    },

    /// `find` or `withdraw` target is not in the tree.
    #[error("key not found")]
    KeyNotFound,

    /// The tree already holds an element comparing equal to the inserted one.
    #[error("duplicate key")]
    DuplicateKey,

    /// `attach_key` on a node that already has a key.
    #[error("node already holds a key")]
    AlreadyOccupied,

    /// A child slot already holds a non-empty subtree; detach it first.
    #[error("child slot already holds a subtree")]
    SlotOccupied,

    /// Only leaves may give up their key.
    #[error("node still has children")]
    NotALeaf,

    /// An m-way node has no room for another key and never splits.
    #[error("m-way node full ({capacity} keys)")]
    NodeOverflow {
        /// Maximum number of keys per node, `m - 1`.
        capacity: usize,
    },

    /// An m-way tree needs `m >= 2`, and subtrees must share their parent's order.
    #[error("invalid m-way order {order}")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// An attached subtree holds keys outside the range its slot covers.
    #[error("subtree keys do not fit the slot they are attached to")]
    OrderViolation,

    /// `pop` or `top` on an empty stack.
    #[error("container is empty")]
    EmptyContainer,
}

impl TreeError {
    pub(crate) fn out_of_range(index: usize, end: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            start: 0,
            end,
        }
    }
}

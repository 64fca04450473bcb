//! A LIFO stack stored in an [`Array`]. The depth-first walks use it in place of the call
//! stack.

use crate::array::Array;
use crate::error::{Result, TreeError};

const DEFAULT_CAPACITY: usize = 8;

/// A stack that doubles its backing array whenever a push would overflow it.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    array: Array<Option<T>>,
    count: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// An empty stack with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty stack whose backing array starts with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            array: Array::new(capacity, 0),
            count: 0,
        }
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Pushes `value` on top, growing the backing array when it is full.
    pub fn push(&mut self, value: T) {
        if self.count == self.array.length() {
            let grown = (self.array.length() * 2).max(DEFAULT_CAPACITY);
            self.array.set_length(grown);
        }
        // The slot exists: `count < length` after growing.
        if let Ok(slot) = self.array.get_mut(self.count) {
            *slot = Some(value);
            self.count += 1;
        }
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T> {
        let top = self
            .count
            .checked_sub(1)
            .ok_or(TreeError::EmptyContainer)?;
        let value = self
            .array
            .get_mut(top)?
            .take()
            .ok_or(TreeError::EmptyContainer)?;
        self.count = top;
        Ok(value)
    }

    /// The top element, left in place.
    pub fn top(&self) -> Result<&T> {
        let top = self
            .count
            .checked_sub(1)
            .ok_or(TreeError::EmptyContainer)?;
        self.array.get(top)?.as_ref().ok_or(TreeError::EmptyContainer)
    }

    /// Mutable access to the top element.
    pub fn top_mut(&mut self) -> Result<&mut T> {
        let top = self
            .count
            .checked_sub(1)
            .ok_or(TreeError::EmptyContainer)?;
        self.array
            .get_mut(top)?
            .as_mut()
            .ok_or(TreeError::EmptyContainer)
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn purge(&mut self) {
        while self.pop().is_ok() {}
    }
}

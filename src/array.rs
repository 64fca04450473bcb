//! A bounds-checked array whose valid indices form the window `base..base + length`.
//!
//! # Examples
//!
//! ```
//! use adt_tree::array::Array;
//!
//! let mut array: Array<u8> = Array::new(3, 1);
//!
//! array.set(1, 7).unwrap();
//! assert_eq!(array.get(1), Ok(&7));
//!
//! // Index 0 sits below the window.
//! assert!(array.get(0).is_err());
//! ```

use crate::error::{Result, TreeError};

/// Fixed-length storage with a movable index window. The length only changes through
/// [`Array::set_length`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array<T> {
    data: Vec<T>,
    base: usize,
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            base: 0,
        }
    }
}

impl<T> Array<T> {
    /// Creates an array of `length` default values whose first index is `base`.
    pub fn new(length: usize, base: usize) -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(length);
        data.resize_with(length, T::default);
        Self { data, base }
    }

    /// The first valid index.
    pub fn base(&self) -> usize {
        self.base
    }

    /// How many slots the array holds.
    pub fn length(&self) -> usize {
        self.data.len()
    }

    /// The stored values in physical order, ignoring the base.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Reads the value at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let position = self.position(index)?;
        Ok(&self.data[position])
    }

    /// Mutable access to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let position = self.position(index)?;
        Ok(&mut self.data[position])
    }

    /// Stores `value` at `index` and hands back whatever was there.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, value))
    }

    /// Moves the index window so that it starts at `base`.
    ///
    /// Stored values are not relocated: the value at physical position `p` is read at
    /// `base + p` afterwards.
    pub fn set_base(&mut self, base: usize) {
        self.base = base;
    }

    /// Resizes the array, keeping the first `min(old, new)` values and filling any new
    /// slots with defaults.
    pub fn set_length(&mut self, length: usize)
    where
        T: Default,
    {
        self.set_length_with(length, T::default);
    }

    /// Like [`Array::set_length`] but fills new slots from `fill`.
    pub fn set_length_with(&mut self, length: usize, fill: impl FnMut() -> T) {
        self.data.truncate(length);
        self.data.resize_with(length, fill);
    }

    fn position(&self, index: usize) -> Result<usize> {
        index
            .checked_sub(self.base)
            .filter(|&position| position < self.data.len())
            .ok_or_else(|| TreeError::IndexOutOfRange {
                index,
                start: self.base,
                end: self.base.saturating_add(self.data.len()),
            })
    }
}

// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::AdaptiveArray, error::Error, ops::ElementOps};

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    /// Returns a fresh copy of the element at `index`.
    ///
    /// The array keeps its own copy. Errors:
    /// - [`Error::OutOfBounds`] if `index >= len`;
    /// - [`Error::Vacant`] if the slot is a gap;
    /// - [`Error::CopyFailed`] if `copy` could not duplicate the element.
    pub fn get(&self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds);
        }
        let stored = self.slots[index].as_ref().ok_or(Error::Vacant)?;
        self.ops.copy(stored).ok_or_else(|| {
            tracing::warn!(index, "element copy failed on read");
            Error::CopyFailed
        })
    }
}

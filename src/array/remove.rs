// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::AdaptiveArray, ops::ElementOps};

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    /// Releases the element at `index` through `delete`, leaving a gap slot.
    ///
    /// `len` and `capacity` are unchanged. Returns `false` if `index` is out
    /// of range or the slot is already empty.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        match self.slots[index].take() {
            Some(old) => {
                self.ops.delete(old);
                true
            }
            None => false,
        }
    }
}

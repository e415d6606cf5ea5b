// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::AdaptiveArray, error::Error, ops::ElementOps};

/// Multiplier applied to `index + 1` when a write lands past the capacity.
pub const GROWTH_FACTOR: usize = 2;

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    /// Stores a copy of `element` at `index`.
    ///
    /// - If `index >= capacity`, the buffer first grows to
    ///   `(index + 1) * GROWTH_FACTOR` slots. On [`Error::CapacityOverflow`]
    ///   or [`Error::AllocFailed`] the array is left unchanged.
    /// - An element already stored at `index` is passed to `delete` before
    ///   the copy is taken.
    /// - If `copy` fails the call returns [`Error::CopyFailed`] and the slot is
    ///   left empty. A previous occupant is not restored.
    /// - On success, `len` becomes `max(len, index + 1)`; any untouched
    ///   indices in between become gap slots.
    pub fn set(&mut self, index: usize, element: &T) -> Result<(), Error> {
        if index >= self.capacity() {
            self.grow_for(index)?;
        }

        if let Some(old) = self.slots[index].take() {
            tracing::debug!(index, "releasing overwritten element");
            self.ops.delete(old);
        }

        let Some(dup) = self.ops.copy(element) else {
            tracing::warn!(index, "element copy failed, slot left empty");
            return Err(Error::CopyFailed);
        };
        self.slots[index] = Some(dup);

        if index >= self.len {
            self.len = index + 1;
        }
        Ok(())
    }

    /// Grows `slots` so that `index` is addressable. Leaves `self` untouched on
    /// error.
    fn grow_for(&mut self, index: usize) -> Result<(), Error> {
        let old_capacity = self.capacity();
        let new_capacity = index
            .checked_add(1)
            .and_then(|n| n.checked_mul(GROWTH_FACTOR))
            .ok_or(Error::CapacityOverflow)?;

        self.slots
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| {
                tracing::warn!(index, new_capacity, "adaptive array growth failed");
                Error::AllocFailed
            })?;
        self.slots.resize_with(new_capacity, || None);

        tracing::trace!(old_capacity, new_capacity, "adaptive array grown");
        Ok(())
    }
}

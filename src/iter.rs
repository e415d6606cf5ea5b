// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`AdaptiveArray`](crate::AdaptiveArray).
//!
//! - [`Iter`] borrows the array and yields `(index, &T)` for occupied slots
//!   in ascending index order, skipping gaps. It supports
//!   `DoubleEndedIterator` and `FusedIterator`.
//! - `&AdaptiveArray` iterates the same way.

// Crate imports
use crate::{array::AdaptiveArray, ops::ElementOps};

// Core imports
use core::{iter::FusedIterator, slice};

/// Borrowing iterator returned by [`AdaptiveArray::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
    front: usize,
    back: usize, // exclusive
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            front: 0,
            back: slots.len(),
            slots: slots.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            let i = self.front;
            self.front += 1;
            if let Some(element) = slot {
                return Some((i, element));
            }
        }
        None
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next_back() {
            self.back -= 1;
            if let Some(element) = slot {
                return Some((self.back, element));
            }
        }
        None
    }
}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, O: ElementOps<T>> IntoIterator for &'a AdaptiveArray<T, O> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

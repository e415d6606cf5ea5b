// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `AdaptiveArray` type and its inherent API.
//!
//! `AdaptiveArray<T, O>` is a growable, sparse-indexable array that owns its
//! elements through a bound set of [`ElementOps`]. Elements are copied in on
//! write and copied out on read; the array never hands out ownership of its
//! own copies.
//!
//! Inherent methods are split by concern across the submodules below.

mod get;
mod new;
mod print;
mod remove;
mod set;

pub use new::INITIAL_CAPACITY;
pub use set::GROWTH_FACTOR;

// Crate imports
use crate::{iter::Iter, ops::ElementOps};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::fmt;

/// A growable, sparse-indexable array of opaque elements.
///
/// `AdaptiveArray<T, O>` stores elements of type `T` in a backing buffer of
/// slots, each either empty or occupied, and delegates every element
/// lifecycle step to the bound operations `O`:
///
/// - [`set`](AdaptiveArray::set) stores `O::copy` of the caller's element,
///   releasing any element already in the slot with `O::delete` first;
/// - [`get`](AdaptiveArray::get) returns `O::copy` of the stored element;
/// - [`remove`](AdaptiveArray::remove) and `Drop` pass stored elements to
///   `O::delete`;
/// - [`print_all`](AdaptiveArray::print_all) calls `O::print` per element.
///
/// # Layout and invariants
///
/// Internally, `AdaptiveArray<T, O>` maintains:
///
/// - `slots`, whose length is the physical capacity;
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// `len` is one past the highest index ever successfully written. Indices
/// below `len` that were never written (or were removed) are *gap slots*.
/// Every occupied slot lies below `len`. Capacity never shrinks.
///
/// # Growth
///
/// Writing at `index >= capacity` grows the buffer to
/// `(index + 1) * GROWTH_FACTOR` slots. A growth that overflows or that the
/// allocator refuses fails before anything is touched, so the array keeps its
/// previous length, capacity and contents.
///
/// # Examples
///
/// ```rust
/// use adaptive_array::{AdaptiveArray, CloneOps, Error};
///
/// let mut a: AdaptiveArray<String, CloneOps> = AdaptiveArray::new(CloneOps);
/// a.set(25, &String::from("x")).unwrap();
///
/// assert_eq!(a.len(), 26);
/// assert!(a.capacity() >= 52);
/// assert_eq!(a.get(25).unwrap(), "x");
/// assert_eq!(a.get(24), Err(Error::Vacant));
/// assert_eq!(a.get(26), Err(Error::OutOfBounds));
/// ```
pub struct AdaptiveArray<T, O: ElementOps<T>> {
    pub(crate) slots: Vec<Option<T>>,
    pub(crate) len: usize,
    pub(crate) ops: O,
}

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    /// Returns the physical number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the logical length: one past the highest index written.
    ///
    /// Gap slots are counted.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of occupied slots (`<= len`).
    pub fn occupied(&self) -> usize {
        self.live_slots().iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if `index < len` and the slot holds an element.
    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.live_slots().get(index).is_some_and(Option::is_some)
    }

    /// Returns the bound element operations.
    #[inline]
    pub const fn ops(&self) -> &O {
        &self.ops
    }

    /// Iterates over `(index, &element)` for every occupied slot, in
    /// ascending index order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live_slots())
    }

    /// The slots below `len`.
    #[inline]
    pub(crate) fn live_slots(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }
}

impl<T, O: ElementOps<T>> Drop for AdaptiveArray<T, O> {
    fn drop(&mut self) {
        let len = self.len;
        for element in self.slots[..len].iter_mut().filter_map(Option::take) {
            self.ops.delete(element);
        }
    }
}

impl<T: fmt::Debug, O: ElementOps<T>> fmt::Debug for AdaptiveArray<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, T>(&'a [Option<T>]);

        impl<T: fmt::Debug> fmt::Debug for Entries<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(Iter::new(self.0)).finish()
            }
        }

        f.debug_struct("AdaptiveArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &Entries(self.live_slots()))
            .finish()
    }
}

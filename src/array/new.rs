// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::AdaptiveArray,
    error::Error,
    ops::{ElementOps, FnOps},
};

// Alloc imports
use alloc::vec::Vec;

/// Number of slots a freshly constructed array starts with.
pub const INITIAL_CAPACITY: usize = 10;

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    /// Constructs an empty array with [`INITIAL_CAPACITY`] empty slots.
    ///
    /// Aborts on allocation failure like any other `alloc` collection; use
    /// [`try_new`](AdaptiveArray::try_new) to observe the failure instead.
    pub fn new(ops: O) -> Self {
        let mut slots = Vec::with_capacity(INITIAL_CAPACITY);
        slots.resize_with(INITIAL_CAPACITY, || None);
        tracing::trace!(capacity = INITIAL_CAPACITY, "adaptive array created");
        Self {
            slots,
            len: 0,
            ops,
        }
    }

    /// Constructs an empty array with [`INITIAL_CAPACITY`] empty slots.
    ///
    /// Returns [`Error::AllocFailed`] if the backing storage cannot be
    /// reserved. Nothing is leaked on failure.
    #[inline]
    pub fn try_new(ops: O) -> Result<Self, Error> {
        Self::try_with_capacity(INITIAL_CAPACITY, ops)
    }

    /// Constructs an empty array with `capacity` empty slots.
    ///
    /// Returns [`Error::ZeroCapacity`] for `capacity == 0` and
    /// [`Error::AllocFailed`] if the backing storage cannot be reserved.
    pub fn try_with_capacity(capacity: usize, ops: O) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocFailed)?;
        slots.resize_with(capacity, || None);

        tracing::trace!(capacity, "adaptive array created");
        Ok(Self {
            slots,
            len: 0,
            ops,
        })
    }
}

impl<T, C, D, P> AdaptiveArray<T, FnOps<C, D, P>>
where
    C: Fn(&T) -> Option<T>,
    D: Fn(T),
    P: Fn(&T),
{
    /// Constructs an empty array bound to three closures.
    ///
    /// ```rust
    /// use adaptive_array::AdaptiveArray;
    ///
    /// let mut a = AdaptiveArray::from_fns(
    ///     |s: &String| Some(s.clone()),
    ///     drop,
    ///     |s: &String| println!("{s}"),
    /// );
    /// a.set(0, &String::from("hello")).unwrap();
    /// assert_eq!(a.get(0).unwrap(), "hello");
    /// ```
    #[inline]
    pub fn from_fns(copy: C, delete: D, print: P) -> Self {
        Self::new(FnOps::new(copy, delete, print))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{AdaptiveArray, CloneOps, Error, INITIAL_CAPACITY};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_and_try_new_agree() {
        let a: AdaptiveArray<i32, CloneOps> = AdaptiveArray::new(CloneOps);
        let b: AdaptiveArray<i32, CloneOps> = AdaptiveArray::try_new(CloneOps).unwrap();
        assert_eq!(a.capacity(), INITIAL_CAPACITY);
        assert_eq!(b.capacity(), INITIAL_CAPACITY);
        assert_eq!(a.len(), 0);
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn test_try_with_capacity() {
        let a: AdaptiveArray<i32, CloneOps> =
            AdaptiveArray::try_with_capacity(3, CloneOps).unwrap();
        assert_eq!(a.capacity(), 3);
        assert!(a.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let r = AdaptiveArray::<i32, CloneOps>::try_with_capacity(0, CloneOps);
        assert_eq!(r.err(), Some(Error::ZeroCapacity));
    }

    #[test]
    fn test_unreservable_capacity_fails_cleanly() {
        let r = AdaptiveArray::<u64, CloneOps>::try_with_capacity(usize::MAX, CloneOps);
        assert_eq!(r.err(), Some(Error::AllocFailed));
    }

    #[test]
    fn test_from_fns_binds_closures() {
        let mut a = AdaptiveArray::from_fns(|x: &u8| Some(*x + 1), |_: u8| {}, |_: &u8| {});
        a.set(0, &1).unwrap();
        // copied in (+1), then copied out (+1)
        assert_eq!(a.get(0), Ok(3));
    }
}

// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nullable-handle API over [`AdaptiveArray`].
//!
//! These free functions accept `Option` handles and signed indices and keep
//! the conventions of a handle-based interface:
//!
//! - a missing handle never panics: [`size`] returns `-1`,
//!   [`get_at`] returns `None`, [`destroy`] and [`print_db`] do nothing, and
//!   [`set_at`] fails with [`Error::NullHandle`];
//! - a negative index fails [`set_at`] with [`Error::NegativeIndex`] and reads
//!   as `None` through [`get_at`];
//! - [`get_at`] collapses every read failure into `None`. Use
//!   [`AdaptiveArray::get`] to tell a gap from a failed copy.
//!
//! ```rust
//! use adaptive_array::{CloneOps, handle};
//!
//! let mut a = handle::create::<u32, _>(CloneOps);
//! assert!(handle::set_at(a.as_deref_mut(), 3, &7).is_ok());
//! assert_eq!(handle::get_at(a.as_deref(), 3), Some(7));
//! assert_eq!(handle::size(a.as_deref()), 4);
//! handle::destroy(a);
//!
//! assert_eq!(handle::size::<u32, CloneOps>(None), -1);
//! ```

// Crate imports
use crate::{array::AdaptiveArray, error::Error, ops::ElementOps};

// Alloc imports
use alloc::boxed::Box;

/// Allocates an array with the initial capacity, or `None` if allocation
/// fails.
pub fn create<T, O: ElementOps<T>>(ops: O) -> Option<Box<AdaptiveArray<T, O>>> {
    AdaptiveArray::try_new(ops).ok().map(Box::new)
}

/// Releases every stored element and then the array. No-op for `None`.
#[inline]
pub fn destroy<T, O: ElementOps<T>>(array: Option<Box<AdaptiveArray<T, O>>>) {
    drop(array);
}

/// Stores a copy of `element` at `index`. See [`AdaptiveArray::set`].
pub fn set_at<T, O: ElementOps<T>>(
    array: Option<&mut AdaptiveArray<T, O>>,
    index: isize,
    element: &T,
) -> Result<(), Error> {
    let array = array.ok_or(Error::NullHandle)?;
    let index = usize::try_from(index).map_err(|_| Error::NegativeIndex)?;
    array.set(index, element)
}

/// Returns a copy of the element at `index`, or `None` for a missing handle,
/// a negative or out-of-range index, a gap slot, or a failed copy.
pub fn get_at<T, O: ElementOps<T>>(array: Option<&AdaptiveArray<T, O>>, index: isize) -> Option<T> {
    let index = usize::try_from(index).ok()?;
    array?.get(index).ok()
}

/// Returns the logical size, or `-1` for a missing handle.
pub fn size<T, O: ElementOps<T>>(array: Option<&AdaptiveArray<T, O>>) -> isize {
    // `len <= capacity`, and a `Vec` never holds more than `isize::MAX` slots.
    array.map_or(-1, |a| a.len() as isize)
}

/// Prints every stored element in index order. No-op for `None`.
pub fn print_db<T, O: ElementOps<T>>(array: Option<&AdaptiveArray<T, O>>) {
    if let Some(array) = array {
        array.print_all();
    }
}

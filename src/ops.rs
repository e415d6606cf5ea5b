// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element operations bound to an [`AdaptiveArray`](crate::AdaptiveArray).
//!
//! The array never inspects its elements. Everything it does with them goes
//! through an [`ElementOps`] implementation chosen at construction:
//!
//! - `copy` duplicates an element on every write and every read;
//! - `delete` releases an element on overwrite, removal and drop;
//! - `print` renders an element for [`print_all`](crate::AdaptiveArray::print_all).

// Core imports
use core::fmt;

/// The capability set an [`AdaptiveArray`](crate::AdaptiveArray) uses to
/// manage the lifecycle of its elements.
///
/// # Contract
///
/// - `copy` returns a new, independently owned duplicate, or `None` when
///   duplication is impossible. The array treats `None` as a failure and
///   never retries.
/// - `delete` receives each element the array owned exactly once. It has no
///   error channel.
/// - `print` is a pure side effect; its result is not observed.
pub trait ElementOps<T> {
    /// Duplicates `element`, or returns `None` on failure.
    fn copy(&self, element: &T) -> Option<T>;

    /// Releases an element previously produced by [`copy`](ElementOps::copy).
    fn delete(&self, element: T);

    /// Renders `element` for diagnostics.
    fn print(&self, element: &T);
}

impl<T, O: ElementOps<T> + ?Sized> ElementOps<T> for &O {
    #[inline]
    fn copy(&self, element: &T) -> Option<T> {
        (**self).copy(element)
    }
    #[inline]
    fn delete(&self, element: T) {
        (**self).delete(element)
    }
    #[inline]
    fn print(&self, element: &T) {
        (**self).print(element)
    }
}

/// [`ElementOps`] built from three closures.
///
/// Usually created through
/// [`AdaptiveArray::from_fns`](crate::AdaptiveArray::from_fns).
#[derive(Clone, Copy)]
pub struct FnOps<C, D, P> {
    copy: C,
    delete: D,
    print: P,
}

impl<C, D, P> FnOps<C, D, P> {
    /// Binds the three operations.
    #[inline]
    pub const fn new(copy: C, delete: D, print: P) -> Self {
        Self {
            copy,
            delete,
            print,
        }
    }
}

impl<T, C, D, P> ElementOps<T> for FnOps<C, D, P>
where
    C: Fn(&T) -> Option<T>,
    D: Fn(T),
    P: Fn(&T),
{
    #[inline]
    fn copy(&self, element: &T) -> Option<T> {
        (self.copy)(element)
    }
    #[inline]
    fn delete(&self, element: T) {
        (self.delete)(element)
    }
    #[inline]
    fn print(&self, element: &T) {
        (self.print)(element)
    }
}

impl<C, D, P> fmt::Debug for FnOps<C, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOps").finish_non_exhaustive()
    }
}

/// [`ElementOps`] for any `T: Clone + Debug`.
///
/// `copy` never fails, `delete` drops the element, and `print` emits the
/// element's `Debug` form as a `tracing` event at `INFO` level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneOps;

impl<T: Clone + fmt::Debug> ElementOps<T> for CloneOps {
    #[inline]
    fn copy(&self, element: &T) -> Option<T> {
        Some(element.clone())
    }
    #[inline]
    fn delete(&self, element: T) {
        drop(element);
    }
    fn print(&self, element: &T) {
        tracing::info!(?element, "adaptive array element");
    }
}

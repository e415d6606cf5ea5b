// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `adaptive-array`
//!
//! A `no_std` (+ `alloc`), growable, sparse-indexable array that owns opaque
//! elements through caller-supplied copy/delete/print operations,
//! **with no `unsafe`**.
//!
//! The core type, [`AdaptiveArray<T, O>`], stores elements of any type `T`
//! and manages their whole lifecycle through an [`ElementOps<T>`]
//! implementation `O` bound at construction. It has value semantics: writes
//! store a copy of the caller's element, reads return a fresh copy, and the
//! array's own copies are only ever released through `delete`.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - element duplication and release must go through custom routines (pooled
//!   buffers, handles with external bookkeeping, fallible clones);
//! - elements are written at arbitrary indices, leaving gaps;
//! - a failed growth must leave the container exactly as it was.
//!
//! It may not be the best fit if you want references into the storage or a
//! dense, push-only sequence. Use `Vec` for that.
//!
//! ## High-level semantics
//!
//! - A fresh array has [`INITIAL_CAPACITY`] empty slots and length `0`.
//! - [`AdaptiveArray::set`] at `index >= capacity` grows the buffer to
//!   `(index + 1) * GROWTH_FACTOR` slots. Growth either succeeds or leaves the
//!   array untouched ([`Error::CapacityOverflow`] / [`Error::AllocFailed`]).
//! - Length is one past the highest index written; lower indices never written
//!   are gap slots.
//! - Capacity never shrinks.
//! - Overwriting releases the old element before copying the new one. If that
//!   copy fails the slot is left empty.
//! - Dropping the array calls `delete` once per stored element.
//!
//! Element operations come from [`ElementOps`]. [`CloneOps`] covers any
//! `T: Clone + Debug`; [`FnOps`] (via [`AdaptiveArray::from_fns`]) binds
//! three closures.
//!
//! The [`handle`] module offers the same operations over `Option` handles and
//! signed indices, with sentinel results (`-1` size, `None` reads) instead of
//! typed errors.
//!
//! ## Logging
//!
//! Construction and growth emit `tracing` events at `TRACE`, overwrites at
//! `DEBUG`, and copy or growth failures at `WARN`. [`CloneOps`] prints
//! elements at `INFO`. No subscriber is installed by this crate.
//!
//! ## Example
//!
//! ```rust
//! use adaptive_array::{AdaptiveArray, CloneOps, Error};
//!
//! let mut a: AdaptiveArray<Vec<u8>, CloneOps> = AdaptiveArray::new(CloneOps);
//! a.set(0, &vec![1, 2]).unwrap();
//! a.set(1000, &vec![3]).unwrap();
//!
//! assert_eq!(a.len(), 1001);
//! assert_eq!(a.get(1000).unwrap(), vec![3]);
//! assert_eq!(a.get(500), Err(Error::Vacant));
//! assert_eq!(a.iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 1000]);
//! ```
//!
//! ## Concurrency
//!
//! The array has no internal synchronization. Share it across threads by
//! wrapping the whole container in a lock.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array;
mod error;
pub mod handle;
mod iter;
mod ops;
#[cfg(test)]
mod testing;

// Public exports (crate API surface)
pub use array::{AdaptiveArray, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use error::Error;
pub use iter::Iter;
pub use ops::{CloneOps, ElementOps, FnOps};

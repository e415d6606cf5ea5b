// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `AdaptiveArray`.
//!
//! These errors cover invalid arguments, allocation and growth failures, and
//! failures reported by the bound element operations. They are `Copy` and
//! implement `core::error::Error`.

// External imports
use thiserror::Error as ThisError;

/// Errors returned by operations on [`AdaptiveArray`](crate::AdaptiveArray)
/// and by the nullable-handle API in [`handle`](crate::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The handle API was given no array.
    #[error("null array handle")]
    NullHandle,
    /// The handle API was given an index below zero.
    #[error("negative index")]
    NegativeIndex,
    /// The index is not below the logical size.
    #[error("index out of bounds")]
    OutOfBounds,
    /// The index is in range but the slot holds no element (a gap slot).
    #[error("slot is empty")]
    Vacant,
    /// An initial capacity of zero was requested.
    #[error("initial capacity must be non-zero")]
    ZeroCapacity,
    /// The grown capacity `(index + 1) * 2` does not fit in `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator could not provide the backing storage.
    #[error("allocation failed")]
    AllocFailed,
    /// The bound copy operation could not duplicate the element.
    #[error("element copy failed")]
    CopyFailed,
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use core::error::Error as CoreError;
    use pretty_assertions::assert_eq;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::NullHandle.to_string(), "null array handle");
        assert_eq!(Error::NegativeIndex.to_string(), "negative index");
        assert_eq!(Error::Vacant.to_string(), "slot is empty");
        assert_eq!(Error::CopyFailed.to_string(), "element copy failed");
        assert_eq!(Error::AllocFailed.to_string(), "allocation failed");
    }
}

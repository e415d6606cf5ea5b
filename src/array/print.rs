// This file is part of adaptive-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::AdaptiveArray, ops::ElementOps};

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    /// Calls `print` on every stored element in ascending index order.
    /// Gap slots are skipped.
    pub fn print_all(&self) {
        for (_, element) in self.iter() {
            self.ops.print(element);
        }
    }
}

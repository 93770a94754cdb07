// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Moves the value out, leaving the container empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Drops the value if one is held; no-op on an empty container.
    #[inline]
    pub fn reset(&mut self) {
        // Empty the slot before the destructor runs.
        drop(self.slot.take());
    }
}

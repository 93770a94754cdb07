// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Moves the value out, leaving the container empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if !self.present {
            return None;
        }
        self.present = false;
        // SAFETY: `present` was true, so `slot` held an initialized `T`. The
        // flag is already cleared, so the bitwise copy read here is the only
        // owner of that value from now on.
        Some(unsafe { self.slot.assume_init_read() })
    }

    /// Drops the value in place if one is held; no-op on an empty container.
    #[inline]
    pub fn reset(&mut self) {
        if self.present {
            self.present = false;
            // SAFETY: `present` was true, so `slot` is initialized. Clearing the
            // flag first means a panicking destructor cannot cause a second drop.
            unsafe { self.slot.assume_init_drop() };
        }
    }
}

// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Drops the current value (if any), then writes the value produced by `f`
    /// into the slot.
    ///
    /// Returns a mutable reference to the new value. If `f` panics the
    /// container is left empty.
    #[inline]
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        let value = f();
        self.present = true;
        self.slot.write(value)
    }
}

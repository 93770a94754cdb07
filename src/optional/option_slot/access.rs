// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Returns `true` if a value is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns `Some(&T)` if a value is held, otherwise `None`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Returns `Some(&mut T)` if a value is held, otherwise `None`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Consumes the container and returns its value, if any.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot
    }
}

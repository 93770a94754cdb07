// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

// Core imports
use core::mem::ManuallyDrop;

impl<T> Optional<T> {
    /// Returns `true` if a value is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.present
    }

    /// Returns `Some(&T)` if a value is held, otherwise `None`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        if self.present {
            // SAFETY: `present` is true, so `slot` is initialized by invariant.
            Some(unsafe { self.slot.assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns `Some(&mut T)` if a value is held, otherwise `None`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.present {
            // SAFETY: `present` is true, so `slot` is initialized by invariant.
            Some(unsafe { self.slot.assume_init_mut() })
        } else {
            None
        }
    }

    /// Consumes the container and returns its value, if any.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        // The value (if any) is moved out by `take`; `Drop` must not see it again.
        let mut this = ManuallyDrop::new(self);
        this.take()
    }
}

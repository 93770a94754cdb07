// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

// Core imports
use core::mem::ManuallyDrop;

impl<T> Optional<T> {
    /// Returns a reference to the value without checking presence.
    ///
    /// # Safety
    ///
    /// The container must hold a value (`self.has_value()` is `true`).
    /// Calling this on an empty container is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.present, "get_unchecked on an empty Optional");
        // SAFETY: the caller guarantees `present`, so `slot` is initialized.
        unsafe { self.slot.assume_init_ref() }
    }

    /// Returns a mutable reference to the value without checking presence.
    ///
    /// # Safety
    ///
    /// The container must hold a value (`self.has_value()` is `true`).
    /// Calling this on an empty container is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.present, "get_unchecked_mut on an empty Optional");
        // SAFETY: the caller guarantees `present`, so `slot` is initialized.
        unsafe { self.slot.assume_init_mut() }
    }

    /// Consumes the container and returns the value without checking presence.
    ///
    /// # Safety
    ///
    /// The container must hold a value (`self.has_value()` is `true`).
    /// Calling this on an empty container is undefined behavior.
    #[inline]
    pub unsafe fn into_inner_unchecked(self) -> T {
        debug_assert!(self.present, "into_inner_unchecked on an empty Optional");
        let this = ManuallyDrop::new(self);
        // SAFETY: the caller guarantees `present`, so `slot` is initialized;
        // `ManuallyDrop` keeps `Drop` from touching the value a second time.
        unsafe { this.slot.assume_init_read() }
    }
}

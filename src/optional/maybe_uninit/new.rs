// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

// Core imports
use core::mem::MaybeUninit;

impl<T> Optional<T> {
    /// Constructs an empty container.
    ///
    /// The slot is left uninitialized; `T` is never default-constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            present: false,
            slot: MaybeUninit::uninit(),
        }
    }

    /// Constructs a container holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            present: true,
            slot: MaybeUninit::new(value),
        }
    }
}

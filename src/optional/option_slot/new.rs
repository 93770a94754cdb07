// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

impl<T> Optional<T> {
    /// Constructs an empty container.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Constructs a container holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { slot: Some(value) }
    }
}

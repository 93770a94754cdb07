// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::optional::Optional;

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

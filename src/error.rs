// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Optional`.
//!
//! Only checked access can fail on the container's behalf. Failures raised by
//! the contained type itself are never wrapped: fallible constructors hand
//! their own error type back unchanged (see
//! [`Optional::try_emplace_with`](crate::Optional::try_emplace_with)).

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Checked access was attempted on an empty container.
    ///
    /// Returned by [`value`](crate::Optional::value),
    /// [`value_mut`](crate::Optional::value_mut),
    /// [`into_value`](crate::Optional::into_value) and
    /// [`move_value`](crate::Optional::move_value).
    BadAccess,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadAccess => f.write_str("bad optional access"),
        }
    }
}

impl CoreError for Error {}

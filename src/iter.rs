// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Optional`](crate::Optional).
//!
//! An `Optional` iterates like a sequence of length zero or one:
//! - `IntoIter<T>` yields the value by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&Optional` and `&mut Optional` iterate through `core::option` iterators.

// Crate imports
use crate::optional::Optional;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `Optional::into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = usize::from(self.inner.is_some());
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Optional<T> {
    /// Iterates over the held value, if any.
    #[inline]
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        self.as_option().into_iter()
    }

    /// Iterates mutably over the held value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> core::option::IntoIter<&mut T> {
        self.as_option_mut().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = core::option::IntoIter<&'a mut T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

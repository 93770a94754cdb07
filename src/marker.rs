// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Zero-sized tags used to pick constructors of [`Optional`](crate::Optional).
//!
//! - [`Nullopt`] / [`NULLOPT`] build or assign an empty container.
//! - [`InPlace`] / [`IN_PLACE`] select the constructors that build the
//!   contained value straight from arguments.
//!
//! Both tags are resolved entirely by the type system and cost nothing at
//! runtime.

/// Marker for an empty [`Optional`](crate::Optional).
///
/// ```rust
/// use inline_optional::{NULLOPT, Optional};
///
/// let mut opt = Optional::some(5);
/// opt = NULLOPT.into();
/// assert!(!opt.has_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullopt;

/// The [`Nullopt`] value.
pub const NULLOPT: Nullopt = Nullopt;

/// Marker selecting in-place construction of the contained value.
///
/// ```rust
/// use inline_optional::{IN_PLACE, Optional};
///
/// let opt: Optional<Vec<i32>> = Optional::in_place_iter(IN_PLACE, [1, 2, 3, 4]);
/// assert_eq!(opt.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InPlace;

/// The [`InPlace`] value.
pub const IN_PLACE: InPlace = InPlace;

#[cfg(test)]
mod tests {
    // Imports
    use super::{IN_PLACE, InPlace, NULLOPT, Nullopt};

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(core::mem::size_of::<Nullopt>(), 0);
        assert_eq!(core::mem::size_of::<InPlace>(), 0);
        assert_eq!(NULLOPT, Nullopt);
        assert_eq!(IN_PLACE, InPlace);
    }
}

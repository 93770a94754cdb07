// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy, move and converting transfers between containers.
//!
//! Every assignment form funnels into one four-case table, keyed by the
//! presence of the source and of the target:
//!
//! | target ← source | effect |
//! |---|---|
//! | empty ← empty | nothing |
//! | empty ← value | build a new value in the slot |
//! | value ← empty | drop the held value, become empty |
//! | value ← value | assign into the held value (no presence transition) |
//!
//! The constructors are the same table applied to a fresh empty target.
//!
//! Rust moves are destructive, so "move from a container that stays usable"
//! is expressed with [`core::mem::take`]: the source keeps its presence and is
//! left holding `U::default()`, the moved-from state.

// Crate imports
use crate::optional::Optional;

// Core imports
use core::mem;

impl<T> Optional<T> {
    /// The four-case assignment table.
    ///
    /// `construct` builds a value for an empty target; `assign` writes into a
    /// held one.
    pub(crate) fn assign_with<S, C, A>(&mut self, source: Option<S>, construct: C, assign: A)
    where
        C: FnOnce(S) -> T,
        A: FnOnce(&mut T, S),
    {
        let Some(source) = source else {
            self.reset();
            return;
        };
        match self.as_option_mut() {
            Some(current) => assign(current, source),
            None => {
                self.emplace_with(|| construct(source));
            }
        }
    }

    /// Copy construction from a container of a convertible type.
    ///
    /// The source is left untouched.
    ///
    /// ```rust
    /// use inline_optional::Optional;
    ///
    /// let a: Optional<&str> = Optional::some("Content");
    /// let b: Optional<String> = Optional::cloned_from(&a);
    /// assert_eq!(*b, "Content");
    /// assert_eq!(*a, "Content");
    /// ```
    #[inline]
    pub fn cloned_from<U>(source: &Optional<U>) -> Self
    where
        U: Clone + Into<T>,
    {
        let mut out = Self::new();
        out.assign_cloned(source);
        out
    }

    /// Move construction that leaves the source present but moved-from.
    ///
    /// ```rust
    /// use inline_optional::Optional;
    ///
    /// let mut src: Optional<String> = Optional::from_value("one");
    /// let dst: Optional<String> = Optional::move_from(&mut src);
    /// assert_eq!(*dst, "one");
    /// assert!(src.has_value());
    /// assert_eq!(*src, "");
    /// ```
    #[inline]
    pub fn move_from<U>(source: &mut Optional<U>) -> Self
    where
        U: Default + Into<T>,
    {
        let mut out = Self::new();
        out.assign_moved(source);
        out
    }

    /// Converting move construction, consuming the source.
    ///
    /// ```rust
    /// use inline_optional::Optional;
    ///
    /// let a: Optional<&str> = Optional::some("Content");
    /// let b: Optional<String> = a.convert();
    /// assert_eq!(*b, "Content");
    /// ```
    #[inline]
    pub fn convert<V>(self) -> Optional<V>
    where
        T: Into<V>,
    {
        let mut out: Optional<V> = Optional::new();
        out.assign_optional(self);
        out
    }

    /// Copy assignment from a container of a convertible type.
    #[inline]
    pub fn assign_cloned<U>(&mut self, source: &Optional<U>)
    where
        U: Clone + Into<T>,
    {
        self.assign_with(
            source.as_option(),
            |value| value.clone().into(),
            |current, value| *current = value.clone().into(),
        );
    }

    /// Move assignment that leaves the source present but moved-from.
    ///
    /// A held value is assigned over, not dropped and rebuilt.
    #[inline]
    pub fn assign_moved<U>(&mut self, source: &mut Optional<U>)
    where
        U: Default + Into<T>,
    {
        self.assign_with(
            source.as_option_mut().map(mem::take),
            Into::into,
            |current, value| *current = value.into(),
        );
    }

    /// Converting move assignment, consuming the source.
    #[inline]
    pub fn assign_optional<U>(&mut self, source: Optional<U>)
    where
        U: Into<T>,
    {
        self.assign_with(
            source.into_option(),
            Into::into,
            |current, value| *current = value.into(),
        );
    }

    /// Assigns a value convertible into `T`.
    ///
    /// A held value is assigned over; an empty container gets a new value.
    /// Either way the container ends present, and the returned reference
    /// points at the stored value.
    ///
    /// ```rust
    /// use inline_optional::Optional;
    ///
    /// let mut opt: Optional<f64> = Optional::new();
    /// opt.assign(1.0f32);
    /// assert_eq!(*opt, 1.0);
    /// opt.assign(2i32);
    /// assert_eq!(*opt, 2.0);
    /// ```
    #[inline]
    pub fn assign<U>(&mut self, value: U) -> &mut T
    where
        U: Into<T>,
    {
        if self.has_value() {
            let current: &mut T = self;
            *current = value.into();
            current
        } else {
            self.emplace_with(|| value.into())
        }
    }
}

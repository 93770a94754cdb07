// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Optional` type and its inherent API.
//!
//! `Optional<T>` is a slot that holds zero or one `T` inline. The storage
//! primitives (`new`, `some`, `has_value`, `as_option`, `emplace_with`, `take`,
//! `reset`, ...) live in the selected backend; everything in this module is
//! written on top of them and has the same semantics in both backends.

#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod option_slot;

// Crate imports
use crate::{
    error::Error,
    marker::{InPlace, Nullopt},
};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

/// A slot holding zero or one value of type `T`.
///
/// # Layout and invariants
///
/// The container keeps a presence flag and storage for one `T`:
///
/// - the storage holds a live `T` if and only if the flag is set;
/// - `T` is never default-constructed, cloned or moved unless an operation
///   asks for exactly that (`T: Default` is only required by the operations
///   that leave a moved-from value behind, such as [`move_from`] and
///   [`move_out`]);
/// - producing a new value happens *after* the old one is gone and *before*
///   the flag is set, so a constructor that fails (returns `Err` or panics)
///   leaves the container empty;
/// - dropping the container drops the value only when one is held.
///
/// # States
///
/// There are two states, *empty* and *present*:
///
/// | From → To | Operations |
/// |---|---|
/// | empty → present | [`some`], [`in_place`], [`emplace`], [`assign`], assigning from a present source |
/// | present → present | [`assign`], [`emplace`], [`Clone::clone_from`], [`assign_cloned`], [`assign_moved`] |
/// | present → empty | [`reset`], `NULLOPT.into()`, [`take`], [`swap`] with an empty peer, assigning from an empty source |
/// | empty → empty | [`reset`] and empty assignments are no-ops |
///
/// # Access
///
/// - Checked: [`value`], [`value_mut`], [`into_value`] and [`move_value`]
///   return [`Error::BadAccess`] on an empty container.
/// - Unchecked: `*opt` / `opt.field` go through [`Deref`] / [`DerefMut`].
///   Dereferencing an empty container is a caller bug and panics; it is not
///   a recoverable error. The `unsafe-maybe-uninit` backend additionally
///   offers `unsafe` accessors with no check at all.
///
/// # Examples
///
/// ```rust
/// use inline_optional::{Error, NULLOPT, Optional};
///
/// let mut a: Optional<i32> = Optional::new();
/// assert_eq!(a.value(), Err(Error::BadAccess));
///
/// a.assign(5);
/// assert_eq!(*a, 5);
///
/// a = NULLOPT.into();
/// assert!(!a.has_value());
/// ```
///
/// [`move_from`]: Optional::move_from
/// [`move_out`]: Optional::move_out
/// [`some`]: Optional::some
/// [`in_place`]: Optional::in_place
/// [`emplace`]: Optional::emplace
/// [`assign`]: Optional::assign
/// [`assign_cloned`]: Optional::assign_cloned
/// [`assign_moved`]: Optional::assign_moved
/// [`reset`]: Optional::reset
/// [`take`]: Optional::take
/// [`swap`]: Optional::swap
/// [`value`]: Optional::value
/// [`value_mut`]: Optional::value_mut
/// [`into_value`]: Optional::into_value
/// [`move_value`]: Optional::move_value
///
/// # Drop check
///
/// With the `unsafe-maybe-uninit` backend, `Optional<T>` implements `Drop`, so
/// a borrow held in the container must outlive the container itself. The
/// default backend stores an `Option<T>` and has no such requirement. The
/// following compiles only on the default backend:
///
#[cfg_attr(feature = "unsafe-maybe-uninit", doc = "```compile_fail")]
#[cfg_attr(not(feature = "unsafe-maybe-uninit"), doc = "```rust")]
/// use inline_optional::Optional;
///
/// let mut opt: Optional<&String> = Optional::new();
/// let s = String::from("x");
/// opt.assign(&s);
/// assert_eq!(**opt, "x");
/// ```
///
/// Declaring the borrowed value before the container works on both backends.
pub struct Optional<T> {
    #[cfg(not(feature = "unsafe-maybe-uninit"))]
    pub(crate) slot: Option<T>,
    #[cfg(feature = "unsafe-maybe-uninit")]
    pub(crate) present: bool,
    #[cfg(feature = "unsafe-maybe-uninit")]
    pub(crate) slot: core::mem::MaybeUninit<T>,
}

// Construction
impl<T> Optional<T> {
    /// Constructs a present container from any value convertible into `T`.
    ///
    /// ```rust
    /// use inline_optional::Optional;
    ///
    /// let s: Optional<String> = Optional::from_value("char*");
    /// assert_eq!(*s, "char*");
    ///
    /// let d: Optional<f64> = Optional::from_value(1.5f32);
    /// assert_eq!(*d, 1.5);
    /// ```
    #[inline]
    pub fn from_value<U>(value: U) -> Self
    where
        U: Into<T>,
    {
        Self::in_place_with(InPlace, || value.into())
    }

    /// Constructs the value directly in the slot from an argument pack.
    ///
    /// Several arguments are passed as a tuple; `T` decides how to build
    /// itself from them through its `From` impl.
    ///
    /// ```rust
    /// use inline_optional::{IN_PLACE, Optional};
    ///
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self {
    ///         Point { x, y }
    ///     }
    /// }
    ///
    /// let p: Optional<Point> = Optional::in_place(IN_PLACE, (2, 3));
    /// assert_eq!((p.x, p.y), (2, 3));
    /// ```
    #[inline]
    pub fn in_place<A>(_: InPlace, args: A) -> Self
    where
        T: From<A>,
    {
        Self::in_place_with(InPlace, || T::from(args))
    }

    /// Constructs the value directly in the slot with `f`.
    ///
    /// If `f` panics no container is produced and nothing is dropped.
    #[inline]
    pub fn in_place_with<F>(_: InPlace, f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut out = Self::new();
        out.emplace_with(f);
        out
    }

    /// Constructs the value directly in the slot from an initializer sequence.
    #[inline]
    pub fn in_place_iter<I>(_: InPlace, items: I) -> Self
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        Self::in_place_with(InPlace, || items.into_iter().collect())
    }

    /// Constructs the value in the slot from an initializer sequence plus
    /// further arguments.
    ///
    /// `items` is collected into the sequence type `C`, which `f` combines with
    /// whatever else `T` needs.
    ///
    /// ```rust
    /// use inline_optional::{IN_PLACE, Optional};
    ///
    /// struct Labeled {
    ///     items: Vec<i32>,
    ///     label: String,
    /// }
    ///
    /// let opt = Optional::in_place_iter_with(IN_PLACE, [1, 2, 3], |items: Vec<i32>| Labeled {
    ///     items,
    ///     label: "test".into(),
    /// });
    /// assert_eq!(opt.items.len(), 3);
    /// assert_eq!(opt.label, "test");
    /// ```
    #[inline]
    pub fn in_place_iter_with<I, C, F>(_: InPlace, items: I, f: F) -> Self
    where
        I: IntoIterator,
        C: FromIterator<I::Item>,
        F: FnOnce(C) -> T,
    {
        Self::in_place_with(InPlace, || f(items.into_iter().collect()))
    }

    /// Fallible in-place construction.
    ///
    /// The error returned by `f` is handed back unchanged.
    #[inline]
    pub fn try_in_place_with<F, E>(_: InPlace, f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut out = Self::new();
        out.try_emplace_with(f)?;
        Ok(out)
    }
}

// Emplace
impl<T> Optional<T> {
    /// Drops the current value (if any), then builds a new one from `args`.
    ///
    /// Several arguments are passed as a tuple, as with
    /// [`in_place`](Optional::in_place). Returns a mutable reference to the
    /// new value.
    #[inline]
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Drops the current value (if any), then collects a new one from `items`.
    #[inline]
    pub fn emplace_iter<I>(&mut self, items: I) -> &mut T
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        self.emplace_with(|| items.into_iter().collect())
    }

    /// Drops the current value (if any), then builds a new one from an
    /// initializer sequence plus further arguments (see
    /// [`in_place_iter_with`](Optional::in_place_iter_with)).
    #[inline]
    pub fn emplace_iter_with<I, C, F>(&mut self, items: I, f: F) -> &mut T
    where
        I: IntoIterator,
        C: FromIterator<I::Item>,
        F: FnOnce(C) -> T,
    {
        self.emplace_with(|| f(items.into_iter().collect()))
    }

    /// Drops the current value (if any), then stores the value produced by `f`.
    ///
    /// If `f` returns an error the container is left empty and the error is
    /// returned unchanged.
    ///
    /// ```rust
    /// use inline_optional::Optional;
    ///
    /// let mut opt = Optional::some(7u8);
    /// let res = opt.try_emplace_with(|| u8::try_from(300i32));
    /// assert!(res.is_err());
    /// assert!(!opt.has_value());
    /// ```
    #[inline]
    pub fn try_emplace_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        let value = f()?;
        Ok(self.emplace_with(|| value))
    }
}

// Checked access
impl<T> Optional<T> {
    /// Returns a reference to the value, or [`Error::BadAccess`] if empty.
    #[inline]
    pub fn value(&self) -> Result<&T, Error> {
        self.as_option().ok_or(Error::BadAccess)
    }

    /// Returns a mutable reference to the value, or [`Error::BadAccess`] if empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, Error> {
        self.as_option_mut().ok_or(Error::BadAccess)
    }

    /// Consumes the container and returns its value, or [`Error::BadAccess`] if empty.
    #[inline]
    pub fn into_value(self) -> Result<T, Error> {
        self.into_option().ok_or(Error::BadAccess)
    }

    /// Moves the value out, leaving a moved-from (`T::default()`) value behind.
    ///
    /// The container stays present. Returns [`Error::BadAccess`] if empty.
    #[inline]
    pub fn move_value(&mut self) -> Result<T, Error>
    where
        T: Default,
    {
        self.value_mut().map(mem::take)
    }

    /// Returns the value, or `default` if empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }
}

// Unchecked access
impl<T> Optional<T> {
    /// Moves the value out, leaving a moved-from (`T::default()`) value behind.
    ///
    /// This is the by-value counterpart of `*opt`: the container stays present.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    ///
    /// ```rust
    /// use inline_optional::{IN_PLACE, Optional};
    ///
    /// let mut s: Optional<String> = Optional::in_place(IN_PLACE, "test");
    /// let v = s.move_out();
    /// assert_eq!(v, "test");
    /// assert_eq!(*s, "");
    /// ```
    #[inline]
    #[track_caller]
    pub fn move_out(&mut self) -> T
    where
        T: Default,
    {
        mem::take(&mut **self)
    }
}

impl<T> Optional<T> {
    /// Exchanges contents with `other`.
    ///
    /// - present/present: the two values are swapped in place;
    /// - present/empty (either way round): the value is relocated and the
    ///   presence of both containers flips;
    /// - empty/empty: no-op.
    ///
    /// Swapping twice restores both containers.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.has_value(), other.has_value()) {
            (true, true) => {
                if let (Some(a), Some(b)) = (self.as_option_mut(), other.as_option_mut()) {
                    mem::swap(a, b);
                }
            }
            (true, false) => {
                if let Some(value) = self.take() {
                    other.emplace_with(|| value);
                }
            }
            (false, true) => {
                if let Some(value) = other.take() {
                    self.emplace_with(|| value);
                }
            }
            (false, false) => {}
        }
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.as_option() {
            Some(value) => value,
            None => panic!("dereferenced an empty Optional"),
        }
    }
}
impl<T> DerefMut for Optional<T> {
    /// # Panics
    ///
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.as_option_mut() {
            Some(value) => value,
            None => panic!("dereferenced an empty Optional"),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Nullopt> for Optional<T> {
    #[inline]
    fn from(_: Nullopt) -> Self {
        Self::new()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

// Boolean test
impl<T> From<&Optional<T>> for bool {
    #[inline]
    fn from(value: &Optional<T>) -> Self {
        value.has_value()
    }
}

impl<T: Clone> Clone for Optional<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::cloned_from(self)
    }

    /// Copy assignment: a held value is overwritten with `T::clone_from`
    /// instead of being dropped and rebuilt.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.assign_with(
            source.as_option(),
            |value| value.clone(),
            |current, value| current.clone_from(value),
        );
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional")
            .field("has_value", &self.has_value())
            .field("value", &self.as_option())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}
impl<T: Eq> Eq for Optional<T> {}
impl<T: Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_option().cmp(&other.as_option())
    }
}
impl<T: PartialOrd> PartialOrd for Optional<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_option().partial_cmp(&other.as_option())
    }
}
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state)
    }
}

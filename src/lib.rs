// This file is part of inline-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inline-optional`
//!
//! A `no_std` slot holding zero or one value, with explicit construction,
//! assignment and access rules, **with no `unsafe` by default**.
//!
//! The core type, [`Optional<T>`], stores at most one `T` inline and tracks
//! whether it holds one. Unlike [`core::option::Option`], its API is built around
//! *operations on a slot* rather than pattern matching:
//!
//! - build the value in place from arguments ([`Optional::in_place`],
//!   [`Optional::emplace`]) selected by the [`IN_PLACE`] marker;
//! - assign into a held value instead of dropping and rebuilding it
//!   ([`Optional::assign`], [`Clone::clone_from`]);
//! - transfer between containers of the same or a convertible element type
//!   by copy or by move ([`Optional::cloned_from`], [`Optional::move_from`],
//!   [`Optional::convert`] and the `assign_*` family);
//! - empty a container explicitly with the [`NULLOPT`] marker or
//!   [`Optional::reset`];
//! - read through checked ([`Optional::value`] → [`Error::BadAccess`]) or
//!   unchecked (`*opt`) access.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want a value that is built late, rebuilt in place, or reset, without
//!   requiring `T: Default` for the empty state.
//! - You port code that relies on "assign into the existing value" semantics.
//! - You want a checked accessor that reports a typed error instead of a panic.
//!
//! It may not be the best fit if you only need `Option<T>`'s combinators:
//! `Optional` intentionally has no `map`/`and_then`/`or_else`.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit`
//! feature flag:
//!
//! - **Default backend (safe)**:
//!   - Storage is `Option<T>`.
//!   - The crate is `no_std` and `#![forbid(unsafe_code)]` (outside tests).
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Storage is a presence flag plus `core::mem::MaybeUninit<T>`.
//!   - A small amount of internal `unsafe` writes, reads and drops the slot,
//!     always gated by the flag.
//!   - Adds `unsafe fn` accessors that skip the presence check
//!     (`get_unchecked`, `get_unchecked_mut`, `into_inner_unchecked`).
//!
//! In both backends the **public API is safe** and has the same semantics.
//! One difference is visible to the borrow checker: the `unsafe-maybe-uninit`
//! backend implements `Drop` for `Optional<T>`, so a borrow stored in the
//! container must outlive the container. On the default backend it only has
//! to live as long as it is used. See [`Optional`]'s "Drop check" section.
//!
//! ## Features
//!
//! - `unsafe-maybe-uninit`
//!   - Switches the internal storage to a flag plus `MaybeUninit<T>`.
//!   - Exposes the unchecked accessors.
//!   - Borrows stored in an `Optional` must outlive it (drop check).
//!
//! ## Error and panic behavior
//!
//! - Checked access on an empty container returns [`Error::BadAccess`].
//! - Failures of `T` itself are never wrapped: fallible constructors
//!   ([`Optional::try_emplace_with`], [`Optional::try_in_place_with`]) return
//!   the closure's own error, and panics unwind unchanged. Either way a
//!   container that was building a new value ends up empty.
//! - Dereferencing an empty container (`*opt`, [`Optional::move_out`]) is a
//!   caller bug and **panics**, exactly like indexing a slice out of bounds.
//!
//! ## Example
//!
//! ```rust
//! use inline_optional::{Error, IN_PLACE, NULLOPT, Optional};
//!
//! let mut a: Optional<i32> = Optional::new();
//! assert_eq!(a.value(), Err(Error::BadAccess));
//! a.assign(5);
//! assert_eq!(*a, 5);
//! a = NULLOPT.into();
//! assert!(!a.has_value());
//!
//! let mut s: Optional<String> = Optional::in_place(IN_PLACE, "test");
//! let v = s.move_out();
//! assert_eq!(v, "test");
//! assert_eq!(*s, "");
//! ```
//!
//! See [`Optional`] for the full state table and access rules.

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod convert;
mod error;
mod iter;
mod marker;
mod optional;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use marker::{IN_PLACE, InPlace, NULLOPT, Nullopt};
pub use optional::Optional;

// Invariants for the `unsafe-maybe-uninit` backend:
// - `slot` holds an initialized `T` if and only if `present` is true.
// - `present` is cleared before a held value is dropped or read out, and set
//   only after a new value has been written, so a panic at any point leaves
//   the flag describing the slot truthfully.
// - All public methods maintain these invariants.

mod access;
mod drop;
mod emplace;
mod new;
mod take;
mod unchecked;

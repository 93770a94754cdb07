// Invariants for the default (safe) backend:
// - `slot` is `Some` exactly when the container holds a value.
// - Every transition to a new value clears `slot` before the new value is
//   produced, so a failed construction leaves `None` behind.

mod access;
mod emplace;
mod new;
mod take;

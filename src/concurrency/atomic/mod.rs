//! Inline, lock-free atomic primitives.
//!
//! These types live by value inside larger concurrent structures: no heap
//! allocation, no indirection, and no caller-chosen memory orderings.
//!
//! Important:
//! - Only single-variable acquire/release visibility is promised. Nothing here
//!   gives sequential consistency across distinct atomics.
//! - Nothing here blocks or spins. Retry policies belong to the caller.

/// Inline atomic boolean.
pub mod bool;
/// Machine-word atomic integer backing the boolean.
pub mod int;
mod sync;

pub use self::bool::AtomicBool;
pub use self::int::AtomicInt;

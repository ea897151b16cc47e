//! Concurrency primitives meant to be embedded as fields.
//!
//! Important: these types synchronize a single word each. Composite invariants
//! spanning several fields still need the enclosing structure's own protocol.

pub mod atomic;

pub use atomic::{AtomicBool, AtomicInt};

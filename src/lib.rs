//! # `halo-atomic` - Inline Atomic Flags
//!
//! An allocation-free atomic boolean meant to sit as a private field inside
//! larger concurrent structures (queues, pools, state machines), backed by a
//! single machine-word atomic integer.
//!
//! ## Guarantees
//!
//! - **No allocation, no indirection**: `AtomicBool` is `repr(transparent)` over
//!   one `AtomicIsize`; every operation lowers to one hardware atomic.
//! - **Acquire/release only**: reads acquire, writes release, exchange and
//!   compare-and-set are acquire-release. No cross-variable sequential
//!   consistency is promised.
//! - **Total operations**: nothing blocks, spins, allocates or fails.
//!
//! ## Caller Contract
//!
//! The flag is not `Clone`/`Copy`. A second value is a second, unrelated cell,
//! so share one instance by reference instead of duplicating it.
//!
//! ## Example
//!
//! ```rust
//! use halo_atomic::AtomicBool;
//!
//! struct Worker {
//!     shutdown: AtomicBool,
//! }
//!
//! let worker = Worker { shutdown: AtomicBool::default() };
//! assert!(!worker.shutdown.read());
//!
//! // Exactly one caller wins the transition.
//! assert!(worker.shutdown.try_set_true());
//! assert!(!worker.shutdown.try_set_true());
//! assert_eq!(worker.shutdown.to_string(), "true");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;

pub use concurrency::{AtomicBool, AtomicInt};

// Compile-time assertions for the inline-field layout.
#[cfg(not(loom))]
const _: () = {
    use core::mem;
    use core::sync::atomic::AtomicIsize;

    // One machine word, nothing more.
    assert!(mem::size_of::<AtomicInt>() == mem::size_of::<AtomicIsize>());
    assert!(mem::align_of::<AtomicInt>() == mem::align_of::<AtomicIsize>());
    assert!(mem::size_of::<AtomicBool>() == mem::size_of::<usize>());
    assert!(mem::align_of::<AtomicBool>() == mem::align_of::<AtomicIsize>());
};

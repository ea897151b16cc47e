//! Backing atomics, swapped for loom's model-checked versions under `cfg(loom)`.

#[cfg(not(loom))]
pub(crate) use core::sync::atomic::{AtomicIsize, Ordering};

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{AtomicIsize, Ordering};

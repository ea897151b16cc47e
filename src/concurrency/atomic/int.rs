use core::fmt;

use super::sync::{AtomicIsize, Ordering};

/// A machine-word atomic integer with fixed acquire/release orderings.
///
/// Loads are `Acquire`, stores are `Release`, and every read-modify-write is
/// `AcqRel` (with `Acquire` on a failed compare-exchange). Callers never pick
/// an ordering.
#[repr(transparent)]
pub struct AtomicInt {
    inner: AtomicIsize,
}

impl AtomicInt {
    /// Creates a new atomic integer.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: isize) -> Self {
        Self {
            inner: AtomicIsize::new(value),
        }
    }

    /// Creates a new atomic integer.
    #[cfg(loom)]
    pub fn new(value: isize) -> Self {
        Self {
            inner: AtomicIsize::new(value),
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn read(&self) -> isize {
        self.inner.load(Ordering::Acquire)
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn write(&self, value: isize) {
        self.inner.store(value, Ordering::Release);
    }

    /// Swaps the current value, returning the previous value.
    #[inline(always)]
    pub fn exchange(&self, value: isize) -> isize {
        self.inner.swap(value, Ordering::AcqRel)
    }

    /// Stores `new` if the current value equals `current`.
    ///
    /// Returns `Ok(previous)` when the store happened and `Err(observed)` when
    /// it did not. A single strong attempt: never fails spuriously, never loops.
    #[inline(always)]
    pub fn compare_exchange(&self, current: isize, new: isize) -> Result<isize, isize> {
        self.inner
            .compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire)
    }

    /// Stores `new` if the current value equals `current`, returning whether
    /// the store happened.
    #[inline(always)]
    pub fn try_set(&self, current: isize, new: isize) -> bool {
        self.compare_exchange(current, new).is_ok()
    }

    /// Consumes the cell and returns its value.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn into_inner(self) -> isize {
        self.inner.into_inner()
    }

    /// Consumes the cell and returns its value.
    #[cfg(loom)]
    pub fn into_inner(self) -> isize {
        self.read()
    }
}

impl Default for AtomicInt {
    #[inline(always)]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<isize> for AtomicInt {
    #[inline(always)]
    fn from(value: isize) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicInt").field(&self.read()).finish()
    }
}

impl serde::Serialize for AtomicInt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.read(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for AtomicInt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <isize as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn compare_exchange_reports_previous_and_observed() {
        let cell = AtomicInt::new(3);
        assert_eq!(cell.compare_exchange(3, 4), Ok(3));
        assert_eq!(cell.compare_exchange(3, 5), Err(4));
        assert_eq!(cell.read(), 4);
    }

    #[test]
    fn try_set_only_stores_on_match() {
        let cell = AtomicInt::default();
        assert!(!cell.try_set(1, 2));
        assert_eq!(cell.read(), 0);
        assert!(cell.try_set(0, 2));
        assert_eq!(cell.exchange(7), 2);
        assert_eq!(cell.into_inner(), 7);
    }
}

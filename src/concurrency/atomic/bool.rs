use core::fmt;

use super::AtomicInt;

/// Encodes a boolean into the cell's `{0, 1}` representation.
#[inline(always)]
const fn encode(value: bool) -> isize {
    value as isize
}

#[inline(always)]
const fn decode(raw: isize) -> bool {
    raw != 0
}

/// An atomic boolean stored inline in one machine-word atomic cell.
///
/// `false` is stored as `0` and `true` as `1`. Every operation maps onto exactly
/// one atomic primitive of the backing [`AtomicInt`], so the stored word is
/// never observed outside `{0, 1}`.
///
/// Orderings are fixed: reads are `Acquire`, writes are `Release`, and
/// exchange / compare-and-set are `AcqRel`.
///
/// # Sharing
///
/// The flag is meant to live as a field inside a larger concurrent structure
/// and be reached through a shared reference. It is deliberately neither
/// `Clone` nor `Copy`: a duplicated value would be an independent cell, and
/// writes to one copy would never be seen through the other. Share it by
/// reference (or behind an `Arc`), never by value.
///
/// ```rust
/// use halo_atomic::AtomicBool;
///
/// static READY: AtomicBool = AtomicBool::new(false);
///
/// assert!(READY.try_set_true());
/// assert!(!READY.try_set_true());
/// assert!(READY.read());
/// ```
#[repr(transparent)]
pub struct AtomicBool {
    cell: AtomicInt,
}

impl AtomicBool {
    /// Creates a new atomic bool.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            cell: AtomicInt::new(encode(value)),
        }
    }

    /// Creates a new atomic bool.
    #[cfg(loom)]
    pub fn new(value: bool) -> Self {
        Self {
            cell: AtomicInt::new(encode(value)),
        }
    }

    /// Loads the current value with `Acquire` ordering.
    #[inline(always)]
    pub fn read(&self) -> bool {
        decode(self.cell.read())
    }

    /// Stores `value` with `Release` ordering.
    #[inline(always)]
    pub fn write(&self, value: bool) {
        self.cell.write(encode(value));
    }

    /// Stores `value` and returns the value it replaced.
    #[inline(always)]
    pub fn exchange(&self, value: bool) -> bool {
        decode(self.cell.exchange(encode(value)))
    }

    /// Stores `new` if the current value equals `expected`.
    ///
    /// Returns whether the store happened. This is a single attempt; callers
    /// that want a spin-CAS loop drive the retries (and any backoff) themselves.
    #[inline(always)]
    pub fn compare_and_set(&self, expected: bool, new: bool) -> bool {
        match self.cell.compare_exchange(encode(expected), encode(new)) {
            Ok(_) => true,
            Err(_observed) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "halo_atomic::atomic_bool",
                    expected,
                    new,
                    observed = decode(_observed),
                    "compare_and_set did not store"
                );
                false
            }
        }
    }

    /// Flips `false` to `true`, returning whether this call made the transition.
    ///
    /// Already `true` is a no-op that returns `false`.
    #[inline(always)]
    pub fn try_set_true(&self) -> bool {
        self.compare_and_set(false, true)
    }

    /// Flips `true` to `false`, returning whether this call made the transition.
    ///
    /// Already `false` is a no-op that returns `false`.
    #[inline(always)]
    pub fn try_set_false(&self) -> bool {
        self.compare_and_set(true, false)
    }

    /// Same as [`read`](Self::read).
    #[inline(always)]
    pub fn get(&self) -> bool {
        self.read()
    }

    /// Same as [`write`](Self::write).
    #[inline(always)]
    pub fn set(&self, value: bool) {
        self.write(value);
    }

    /// Consumes the flag and returns its value.
    #[inline(always)]
    pub fn into_inner(self) -> bool {
        decode(self.cell.into_inner())
    }
}

impl Default for AtomicBool {
    /// Creates a `false` flag.
    #[inline(always)]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    #[inline(always)]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

/// Formats a snapshot; the value may change right after the read.
impl fmt::Display for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.read(), f)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicBool").field(&self.read()).finish()
    }
}

impl serde::Serialize for AtomicBool {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.read())
    }
}

impl<'de> serde::Deserialize<'de> for AtomicBool {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <bool as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_zero_and_one() {
        assert_eq!(encode(false), 0);
        assert_eq!(encode(true), 1);
        assert!(!decode(0));
        assert!(decode(1));
    }

    #[test]
    fn backing_word_stays_in_range() {
        let flag = AtomicBool::new(true);
        flag.exchange(false);
        flag.try_set_true();
        flag.compare_and_set(true, true);
        assert_eq!(flag.cell.read(), 1);
        flag.write(false);
        assert_eq!(flag.cell.read(), 0);
    }
}

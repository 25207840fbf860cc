use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

/// A validated memory alignment in bytes.
///
/// Always a power of two in `1..=Alignment::MAX`, the largest value
/// `#[repr(align)]` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment(NonZeroUsize);

impl Alignment {
    /// Largest alignment accepted by `#[repr(align(N))]` (2^29).
    pub const MAX: usize = 1 << 29;

    /// Returns `None` unless `bytes` is a power of two no larger than [`Self::MAX`].
    #[must_use]
    pub const fn new(bytes: usize) -> Option<Self> {
        if !bytes.is_power_of_two() || bytes > Self::MAX {
            return None;
        }
        match NonZeroUsize::new(bytes) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Alignment of `T` as laid out by the compiler.
    #[must_use]
    pub const fn of<T>() -> Self {
        // align_of is always a non-zero power of two within range.
        match Self::new(std::mem::align_of::<T>()) {
            Some(a) => a,
            None => Self(NonZeroUsize::MIN),
        }
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Whether `address` is a multiple of this alignment.
    #[must_use]
    pub const fn is_aligned(self, address: usize) -> bool {
        address & (self.get() - 1) == 0
    }

    /// Rounds `value` up to the next multiple of this alignment.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn align_up(self, value: usize) -> Option<usize> {
        let mask = self.get() - 1;
        match value.checked_add(mask) {
            Some(v) => Some(v & !mask),
            None => None,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.get())
    }
}

impl Serialize for Alignment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = usize::deserialize(deserializer)?;
        Self::new(bytes).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "alignment must be a power of two no larger than {}, got {bytes}",
                Self::MAX
            ))
        })
    }
}

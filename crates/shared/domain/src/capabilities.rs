use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Language and platform capabilities available to the current target.
    ///
    /// The first four are language guarantees in Rust and are always present;
    /// they exist so callers porting feature-detection code have a direct answer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u32 {
        const MOVE_SEMANTICS = 1 << 0;
        const NULL_POINTER_LITERAL = 1 << 1;
        const NOEXCEPT = 1 << 2;
        const OVERRIDE_AND_FINAL = 1 << 3;
        /// The environment can run a nested modal event loop.
        const MODAL_LOOPS = 1 << 4;
        /// Inline assembly is available for the target architecture.
        const INLINE_ASM = 1 << 5;

        const LANGUAGE = Self::MOVE_SEMANTICS.bits()
            | Self::NULL_POINTER_LITERAL.bits()
            | Self::NOEXCEPT.bits()
            | Self::OVERRIDE_AND_FINAL.bits();
    }
}

impl Capabilities {
    /// Capabilities of the current compilation target.
    #[must_use]
    pub const fn current() -> Self {
        let mut caps = Self::LANGUAGE;
        if !cfg!(target_os = "android") {
            caps = caps.union(Self::MODAL_LOOPS);
        }
        if cfg!(any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "aarch64",
            target_arch = "arm"
        )) {
            caps = caps.union(Self::INLINE_ASM);
        }
        caps
    }
}

impl From<u32> for Capabilities {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for Capabilities {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Capabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Self::from)
    }
}

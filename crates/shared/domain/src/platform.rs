use serde::{Deserialize, Serialize};
use std::fmt;

/// Native toolchain family the compilation target links against.
///
/// Rust code is always compiled by `rustc`, but the surrounding C toolchain
/// (linker, CRT, debugger conventions) still differs per target. This is what
/// the family describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilerFamily {
    Msvc,
    Gcc,
    Clang,
    Other,
}

impl CompilerFamily {
    /// Resolves the family for the current compilation target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_env = "msvc") {
            Self::Msvc
        } else if cfg!(target_vendor = "apple") {
            Self::Clang
        } else if cfg!(target_env = "gnu") {
            Self::Gcc
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Msvc => "msvc",
            Self::Gcc => "gcc",
            Self::Clang => "clang",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system family of the compilation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Windows,
    Linux,
    #[serde(rename = "macos")]
    MacOs,
    Ios,
    Android,
    Other,
}

impl OsFamily {
    /// Resolves the family for the current compilation target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Other => "other",
        }
    }

    /// Whether the family exposes POSIX process and signal APIs.
    #[must_use]
    pub const fn is_posix(self) -> bool {
        matches!(self, Self::Linux | Self::MacOs | Self::Ios | Self::Android)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

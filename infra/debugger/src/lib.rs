//! # Debugger
//!
//! Detection of an attached debugger and best-effort break-in, one backend per
//! target family:
//!
//! * [`WindowsBackend`]: `IsDebuggerPresent` / `DebugBreak`.
//! * [`PosixBackend`]: `TracerPid` (Linux, Android) or `PROC_FLAG_TRACED`
//!   (macOS), break-in via `SIGTRAP`. Other Unixes report no debugger.
//! * [`GenericBackend`]: never attached, break-in is a no-op.
//!
//! The backend for the compilation target is chosen at compile time and
//! returned by [`native`]. All `unsafe` FFI in the workspace lives in this crate.
//!
//! ## Example
//!
//! ```rust
//! use plinth_debugger::{DebugBackend, native};
//!
//! let backend = native();
//! if backend.is_debugger_attached() {
//!     backend.trigger_break();
//! }
//! ```

mod generic;
#[cfg(unix)]
mod posix;
pub mod status;
#[cfg(windows)]
mod win32;

pub use crate::generic::GenericBackend;
#[cfg(unix)]
pub use crate::posix::PosixBackend;
#[cfg(windows)]
pub use crate::win32::WindowsBackend;

use std::fmt::Debug;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{trace, warn};

/// Platform primitives for debugger interaction.
///
/// Implementations must be safe to call from any thread and must not panic.
pub trait DebugBackend: Debug + Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether a debugger is attached to this process.
    ///
    /// Returns `false` whenever the state cannot be determined.
    fn is_debugger_attached(&self) -> bool;

    /// Raises a breakpoint trap unconditionally.
    ///
    /// Without an attached debugger the outcome is platform-defined, so callers
    /// should go through [`break_if_attached`].
    fn trigger_break(&self);
}

/// Backend type selected for the compilation target.
#[cfg(windows)]
pub type NativeBackend = WindowsBackend;
/// Backend type selected for the compilation target.
#[cfg(unix)]
pub type NativeBackend = PosixBackend;
/// Backend type selected for the compilation target.
#[cfg(not(any(unix, windows)))]
pub type NativeBackend = GenericBackend;

static NATIVE: NativeBackend = NativeBackend::new();

/// Returns the backend for the compilation target.
#[must_use]
pub fn native() -> &'static dyn DebugBackend {
    &NATIVE
}

/// Breaks into the debugger only if one is attached.
///
/// Returns `true` when a break was attempted. A panicking backend is contained
/// and reported as no break.
pub fn break_if_attached(backend: &dyn DebugBackend) -> bool {
    if !backend.is_debugger_attached() {
        trace!(backend = backend.name(), "No debugger attached, skipping break");
        return false;
    }

    match catch_unwind(AssertUnwindSafe(|| backend.trigger_break())) {
        Ok(()) => true,
        Err(_) => {
            warn!(backend = backend.name(), "Debugger break failed");
            false
        }
    }
}

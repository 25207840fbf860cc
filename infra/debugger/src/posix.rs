#![allow(unsafe_code)] // libc calls: raise(2), proc_pidinfo(3)

use crate::DebugBackend;
use tracing::trace;

/// Backend for Unix-like targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosixBackend;

impl PosixBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DebugBackend for PosixBackend {
    fn name(&self) -> &'static str {
        "posix"
    }

    fn is_debugger_attached(&self) -> bool {
        is_traced()
    }

    fn trigger_break(&self) {
        // SAFETY: raise(2) has no memory-safety preconditions.
        let rc = unsafe { libc::raise(libc::SIGTRAP) };
        if rc != 0 {
            trace!(rc, "raise(SIGTRAP) failed");
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn is_traced() -> bool {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| crate::status::tracer_pid(&status))
        .is_some_and(|pid| pid != 0)
}

/// `PROC_FLAG_TRACED` from `<sys/proc_info.h>`.
#[cfg(target_os = "macos")]
const PROC_FLAG_TRACED: u32 = 0x2;

#[cfg(target_os = "macos")]
fn is_traced() -> bool {
    let mut info = std::mem::MaybeUninit::<libc::proc_bsdinfo>::zeroed();
    let Ok(size) = libc::c_int::try_from(std::mem::size_of::<libc::proc_bsdinfo>()) else {
        return false;
    };
    // SAFETY: getpid(2) cannot fail.
    let pid = unsafe { libc::getpid() };

    // SAFETY: the buffer is valid for `size` bytes for the duration of the call.
    let written = unsafe {
        libc::proc_pidinfo(pid, libc::PROC_PIDTBSDINFO, 0, info.as_mut_ptr().cast(), size)
    };
    if written != size {
        trace!(written, "proc_pidinfo(PROC_PIDTBSDINFO) failed");
        return false;
    }

    // SAFETY: proc_pidinfo filled the whole struct, and all-zero is valid anyway.
    let info = unsafe { info.assume_init() };
    info.pbi_flags & PROC_FLAG_TRACED != 0
}

// iOS has no public process-info API; undeterminable reads as detached.
#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
const fn is_traced() -> bool {
    false
}

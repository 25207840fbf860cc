#![allow(unsafe_code)] // Win32 debugging API

use crate::DebugBackend;
use ::windows::Win32::System::Diagnostics::Debug::{DebugBreak, IsDebuggerPresent};

/// Backend for Windows targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsBackend;

impl WindowsBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DebugBackend for WindowsBackend {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn is_debugger_attached(&self) -> bool {
        // SAFETY: IsDebuggerPresent takes no arguments and only reads the PEB.
        unsafe { IsDebuggerPresent() }.as_bool()
    }

    fn trigger_break(&self) {
        // SAFETY: DebugBreak raises EXCEPTION_BREAKPOINT; no memory is touched.
        unsafe { DebugBreak() };
    }
}

use crate::DebugBackend;

/// Fallback for targets without a native backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericBackend;

impl GenericBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DebugBackend for GenericBackend {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn is_debugger_attached(&self) -> bool {
        false
    }

    fn trigger_break(&self) {}
}

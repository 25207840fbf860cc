//! # Probe
//!
//! Collects the resolved build configuration, capabilities and debugger state
//! into a [`PlatformReport`] that renders as text or JSON.

pub mod args;

use plinth::{BuildConfig, Capabilities, CompilerFamily, FailurePolicy, OsFamily};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformReport {
    pub os: OsFamily,
    pub compiler: CompilerFamily,
    pub debug_build: bool,
    pub assertions_active: bool,
    pub log_assertions_in_release: bool,
    pub failure_policy: FailurePolicy,
    pub deprecation_warnings: bool,
    pub capabilities: Vec<&'static str>,
    pub debugger_backend: &'static str,
    pub debugger_attached: bool,
}

impl PlatformReport {
    /// Snapshot of the process-wide state.
    #[must_use]
    pub fn collect() -> Self {
        let backend = plinth::debugger::native();
        Self::new(
            plinth::build_config(),
            plinth::capabilities(),
            backend.name(),
            backend.is_debugger_attached(),
        )
    }

    #[must_use]
    pub fn new(
        config: &BuildConfig,
        capabilities: Capabilities,
        debugger_backend: &'static str,
        debugger_attached: bool,
    ) -> Self {
        Self {
            os: config.os,
            compiler: config.compiler,
            debug_build: config.debug_build,
            assertions_active: config.assertions_active(),
            log_assertions_in_release: config.log_assertions_in_release,
            failure_policy: config.failure_policy,
            deprecation_warnings: config.deprecation_warnings,
            capabilities: capability_names(capabilities),
            debugger_backend,
            debugger_attached,
        }
    }
}

impl fmt::Display for PlatformReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "os                 {}", self.os)?;
        writeln!(f, "compiler           {}", self.compiler)?;
        writeln!(f, "debug build        {}", self.debug_build)?;
        writeln!(f, "assertions         {}", on_off(self.assertions_active))?;
        writeln!(f, "release logging    {}", on_off(self.log_assertions_in_release))?;
        writeln!(f, "failure policy     {:?}", self.failure_policy)?;
        writeln!(f, "deprecations       {}", on_off(self.deprecation_warnings))?;
        writeln!(f, "capabilities       {}", self.capabilities.join(", "))?;
        write!(
            f,
            "debugger           {} ({})",
            if self.debugger_attached { "attached" } else { "detached" },
            self.debugger_backend
        )
    }
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Lower-case names of the individual flags, composite flags excluded.
fn capability_names(capabilities: Capabilities) -> Vec<&'static str> {
    [
        (Capabilities::MOVE_SEMANTICS, "move_semantics"),
        (Capabilities::NULL_POINTER_LITERAL, "null_pointer_literal"),
        (Capabilities::NOEXCEPT, "noexcept"),
        (Capabilities::OVERRIDE_AND_FINAL, "override_and_final"),
        (Capabilities::MODAL_LOOPS, "modal_loops"),
        (Capabilities::INLINE_ASM, "inline_asm"),
    ]
    .into_iter()
    .filter(|(flag, _)| capabilities.contains(*flag))
    .map(|(_, name)| name)
    .collect()
}

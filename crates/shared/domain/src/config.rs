use crate::platform::{CompilerFamily, OsFamily};
use serde::{Deserialize, Serialize};

/// What an assertion failure does after it has been recorded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the failure and continue.
    LogOnly,
    /// Record the failure, break into an attached debugger, then continue.
    #[default]
    BreakOnFailure,
    /// Record the failure, break into an attached debugger, then panic.
    TerminateOnFailure,
}

impl FailurePolicy {
    #[must_use]
    pub const fn breaks(self) -> bool {
        !matches!(self, Self::LogOnly)
    }

    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::TerminateOnFailure)
    }
}

/// Process-wide build configuration. Set once at startup, read thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub debug_build: bool,
    pub compiler: CompilerFamily,
    pub os: OsFamily,
    pub log_assertions_in_release: bool,
    pub failure_policy: FailurePolicy,
    /// Whether `#[deprecated_api]` emits deprecation warnings in this build.
    ///
    /// Mirrors this crate's `silence-deprecations` feature; it only agrees with
    /// the macro when the feature is enabled through `plinth/silence-deprecations`.
    pub deprecation_warnings: bool,
}

impl BuildConfig {
    /// Resolves every field from the compilation target and crate features.
    #[must_use]
    pub const fn detected() -> Self {
        Self {
            debug_build: cfg!(any(debug_assertions, feature = "force-debug")),
            compiler: CompilerFamily::current(),
            os: OsFamily::current(),
            log_assertions_in_release: cfg!(feature = "log-assertions"),
            failure_policy: FailurePolicy::BreakOnFailure,
            deprecation_warnings: !cfg!(feature = "silence-deprecations"),
        }
    }

    /// Whether assertion conditions are evaluated at all.
    #[must_use]
    pub const fn assertions_active(&self) -> bool {
        self.debug_build || self.log_assertions_in_release
    }

    /// Overlays runtime settings. Target OS and compiler family are never overridden.
    #[must_use]
    pub const fn with_settings(mut self, settings: &PlatformSettings) -> Self {
        if let Some(debug) = settings.force_debug {
            self.debug_build = debug;
        }
        if let Some(log) = settings.log_assertions_in_release {
            self.log_assertions_in_release = log;
        }
        if let Some(policy) = settings.failure_policy {
            self.failure_policy = policy;
        }
        self
    }

    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::detected()
    }
}

/// Optional runtime overrides, typically loaded from a settings file and
/// `PLINTH__*` environment variables.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSettings {
    pub force_debug: Option<bool>,
    pub log_assertions_in_release: Option<bool>,
    pub failure_policy: Option<FailurePolicy>,
}

//! Runtime side of invariant checking.

use crate::global::build_config;
use crate::sink::{DiagnosticSink, TracingSink};
use plinth_debugger::{DebugBackend, break_if_attached};
use plinth_domain::{AssertionFailure, BuildConfig, SourceLocation};
use std::borrow::Cow;
use std::fmt;

static TRACING_SINK: TracingSink = TracingSink;

/// What an assertion call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionOutcome {
    /// Assertions are compiled out for this configuration; the condition was not evaluated.
    Skipped,
    /// The condition held.
    Passed,
    /// The failure was recorded and execution continued.
    Recorded,
    /// The failure was recorded and an attached debugger was given control.
    BrokeIntoDebugger,
}

impl AssertionOutcome {
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Recorded | Self::BrokeIntoDebugger)
    }
}

/// Panic payload raised under [`FailurePolicy::TerminateOnFailure`](plinth_domain::FailurePolicy).
///
/// Recover it with `downcast_ref::<InvariantViolation>()` on the payload
/// returned by [`std::panic::catch_unwind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation(pub AssertionFailure);

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant violation: {}", self.0)
    }
}

impl std::error::Error for InvariantViolation {}

/// Evaluates invariants against a configuration, a debugger backend and a sink.
#[derive(Debug, Clone, Copy)]
pub struct Asserter<'a> {
    config: &'a BuildConfig,
    backend: &'a dyn DebugBackend,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Asserter<'a> {
    pub const fn new(
        config: &'a BuildConfig,
        backend: &'a dyn DebugBackend,
        sink: &'a dyn DiagnosticSink,
    ) -> Self {
        Self { config, backend, sink }
    }

    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        self.config
    }

    /// Checks `condition`, which is only evaluated when assertions are active.
    ///
    /// The closure must be free of side effects the program relies on.
    ///
    /// # Panics
    /// Panics with an [`InvariantViolation`] payload when the condition fails
    /// under the terminate policy.
    #[track_caller]
    pub fn check(&self, condition: impl FnOnce() -> bool, expression: &'static str) -> AssertionOutcome {
        if !self.config.assertions_active() {
            return AssertionOutcome::Skipped;
        }
        if condition() {
            return AssertionOutcome::Passed;
        }
        self.fail_at(expression, SourceLocation::caller())
    }

    /// Unconditional failure at the caller's location.
    ///
    /// # Panics
    /// Under the terminate policy, see [`Asserter::check`].
    #[track_caller]
    pub fn fail(&self, expression: impl Into<Cow<'static, str>>) -> AssertionOutcome {
        self.fail_at(expression, SourceLocation::caller())
    }

    /// Unconditional failure at an explicit location.
    ///
    /// # Panics
    /// Under the terminate policy, see [`Asserter::check`].
    #[track_caller]
    pub fn fail_at(
        &self,
        expression: impl Into<Cow<'static, str>>,
        location: SourceLocation,
    ) -> AssertionOutcome {
        if !self.config.assertions_active() {
            return AssertionOutcome::Skipped;
        }

        let failure = AssertionFailure::new(expression, location);
        self.sink.record(&failure);

        let policy = self.config.failure_policy;
        let broke = policy.breaks() && break_if_attached(self.backend);

        if policy.is_fatal() {
            std::panic::panic_any(InvariantViolation(failure));
        }

        if broke { AssertionOutcome::BrokeIntoDebugger } else { AssertionOutcome::Recorded }
    }
}

impl Asserter<'static> {
    /// Asserter bound to the process-wide configuration, the native backend and
    /// the tracing sink.
    #[must_use]
    pub fn global() -> Self {
        Self::new(build_config(), plinth_debugger::native(), &TRACING_SINK)
    }
}

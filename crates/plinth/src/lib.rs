//! Facade crate for the platform primitives.
//! Re-exports domain/kernel/debugger types and the declaration attributes.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! - Call [`init`] (or [`init_from_settings`]) once at startup; otherwise the
//!   configuration detected from the build is used.
//! - Check invariants with [`invariant!`]; the condition is not evaluated at all
//!   in release builds unless assertion logging is enabled.
//! - Annotate declarations with [`align_to`], [`packed`], [`deprecated_api`] and
//!   [`forced_inline`].
//!
//! ```rust
//! use plinth::{align_to, invariant};
//!
//! #[align_to(32)]
//! struct Block([u8; 32]);
//!
//! let block = Block([0; 32]);
//! invariant!(block.0.len() == 32);
//! assert_eq!(std::mem::align_of::<Block>(), 32);
//! ```

pub use plinth_debugger as debugger;
pub use plinth_domain as domain;
pub use plinth_kernel as kernel;

pub use plinth_derive::{align_to, deprecated_api, forced_inline, packed};
pub use plinth_domain::{
    Alignment, AssertionFailure, BuildConfig, Capabilities, CompilerFamily, FailurePolicy,
    OsFamily, PlatformSettings, SourceLocation,
};
pub use plinth_kernel::{AssertionOutcome, InvariantViolation, KernelError, catch_all};

#[doc(hidden)]
pub use tracing as __tracing;

use plinth_kernel::Asserter;
use plinth_kernel::config::load_settings;
use plinth_kernel::global;
use std::path::Path;

/// Installs the process-wide build configuration.
///
/// # Errors
/// Returns [`KernelError::AlreadyInstalled`] if the configuration was already
/// installed or read.
pub fn init(config: BuildConfig) -> Result<&'static BuildConfig, KernelError> {
    global::install(config)
}

/// Detects the build configuration, overlays settings from `path` and the
/// `PLINTH__*` environment, then installs the result.
///
/// # Errors
/// Returns [`KernelError::Config`] for unreadable settings and
/// [`KernelError::AlreadyInstalled`] as for [`init`].
pub fn init_from_settings(
    path: Option<impl AsRef<Path>>,
) -> Result<&'static BuildConfig, KernelError> {
    let settings = load_settings(path)?;
    init(BuildConfig::detected().with_settings(&settings))
}

/// The active process-wide build configuration.
#[must_use]
pub fn build_config() -> &'static BuildConfig {
    global::build_config()
}

/// Checks an invariant against the active configuration.
///
/// When assertions are inactive the closure is never called, so it must not
/// carry side effects the program depends on. On failure the expression and
/// caller location are recorded and an attached debugger, if any, is given
/// control.
///
/// # Panics
/// Panics with an [`InvariantViolation`] under [`FailurePolicy::TerminateOnFailure`].
#[track_caller]
pub fn assert_invariant(condition: impl FnOnce() -> bool, expression: &'static str) -> AssertionOutcome {
    Asserter::global().check(condition, expression)
}

/// Records an unconditional invariant failure at the caller's location.
///
/// # Panics
/// Panics with an [`InvariantViolation`] under [`FailurePolicy::TerminateOnFailure`].
#[track_caller]
pub fn invariant_failed(expression: &'static str) -> AssertionOutcome {
    Asserter::global().fail(expression)
}

/// Breaks into the debugger if one is attached; does nothing otherwise.
///
/// Returns `true` when a break was attempted.
pub fn break_into_debugger_if_attached() -> bool {
    plinth_debugger::break_if_attached(plinth_debugger::native())
}

/// Whether a debugger is attached to this process. `false` when unknown.
#[must_use]
pub fn is_running_under_debugger() -> bool {
    plinth_debugger::native().is_debugger_attached()
}

#[must_use]
pub const fn capabilities() -> Capabilities {
    Capabilities::current()
}

#[must_use]
pub const fn supports_move_semantics() -> bool {
    capabilities().contains(Capabilities::MOVE_SEMANTICS)
}

#[must_use]
pub const fn supports_null_pointer_literal() -> bool {
    capabilities().contains(Capabilities::NULL_POINTER_LITERAL)
}

#[must_use]
pub const fn supports_noexcept() -> bool {
    capabilities().contains(Capabilities::NOEXCEPT)
}

#[must_use]
pub const fn supports_override_and_final() -> bool {
    capabilities().contains(Capabilities::OVERRIDE_AND_FINAL)
}

/// Whether the environment can run a nested modal loop (not on Android).
#[must_use]
pub const fn modal_loops_permitted() -> bool {
    capabilities().contains(Capabilities::MODAL_LOOPS)
}

/// Checks an invariant, capturing the expression text.
///
/// ```rust
/// let items = vec![1, 2, 3];
/// plinth::invariant!(!items.is_empty());
/// ```
#[macro_export]
macro_rules! invariant {
    ($condition:expr $(,)?) => {
        $crate::assert_invariant(|| $condition, ::core::stringify!($condition))
    };
}

/// Unconditional invariant failure, optionally with a literal description.
#[macro_export]
macro_rules! invariant_failed {
    () => {
        $crate::invariant_failed("invariant_failed!()")
    };
    ($description:literal $(,)?) => {
        $crate::invariant_failed($description)
    };
}

/// Debug-build diagnostic line on the `plinth::debug` target.
///
/// Arguments follow `tracing::debug!`. Nothing is emitted when the active
/// configuration is not a debug build.
#[macro_export]
macro_rules! debug_output {
    ($($arg:tt)+) => {
        if $crate::build_config().debug_build {
            $crate::__tracing::debug!(target: "plinth::debug", $($arg)+);
        }
    };
}

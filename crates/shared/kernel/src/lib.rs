//! Kernel utilities behind the `plinth` facade.
//! Keep this crate lightweight; it owns the process-wide build configuration,
//! settings loading, and the assertion engine.
//!
//! ## Assertions
//! ```rust
//! use plinth_kernel::{AssertionOutcome, Asserter};
//!
//! let outcome = Asserter::global().check(|| 2 + 2 == 4, "2 + 2 == 4");
//! assert_ne!(outcome, AssertionOutcome::Recorded);
//! ```
//!
//! ## Settings loading
//! ```rust,ignore
//! use plinth_kernel::config::load_settings;
//! let settings = load_settings(Some("plinth.toml"))?;
//! ```

pub mod assertion;
pub mod config;
pub mod error;
pub mod global;
pub mod guard;
pub mod sink;

pub use assertion::{AssertionOutcome, Asserter, InvariantViolation};
pub use error::{KernelError, KernelErrorExt};
pub use guard::{catch_all, catch_all_with};
pub use plinth_domain as domain;
pub use sink::{ASSERT_TARGET, DiagnosticSink, MemorySink, TracingSink};

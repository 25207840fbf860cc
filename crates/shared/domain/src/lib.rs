//! # Domain Models
//!
//! This crate contains pure platform types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, no OS calls, no heavy logic, just data and target detection
//! resolved from `cfg!` at compile time.

pub mod alignment;
pub mod assertion;
pub mod capabilities;
pub mod config;
pub mod platform;

pub use alignment::Alignment;
pub use assertion::{AssertionFailure, SourceLocation};
pub use capabilities::Capabilities;
pub use config::{BuildConfig, FailurePolicy, PlatformSettings};
pub use platform::{CompilerFamily, OsFamily};

//! Destinations for recorded assertion failures.

use parking_lot::Mutex;
use plinth_domain::AssertionFailure;
use std::fmt::Debug;
use std::io::{self, Write};
use tracing::subscriber::NoSubscriber;
use tracing::{Level, error};

/// `tracing` target used for assertion diagnostics.
pub const ASSERT_TARGET: &str = "plinth::assert";

/// Receives one call per recorded assertion failure.
///
/// Implementations are called from whichever thread failed the assertion and
/// must not block for long or panic.
pub trait DiagnosticSink: Debug + Send + Sync {
    fn record(&self, failure: &AssertionFailure);
}

/// Default sink: an `ERROR` event on [`ASSERT_TARGET`], or a raw stderr line
/// when no subscriber on the current thread would take that event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Whether an `ERROR` event on [`ASSERT_TARGET`] reaches a subscriber from
    /// the calling thread.
    ///
    /// False without any subscriber, once a scoped default has been dropped,
    /// and when the active subscriber filters the target out.
    #[must_use]
    pub fn is_subscribed() -> bool {
        let has_subscriber =
            tracing::dispatcher::get_default(|dispatch| !dispatch.is::<NoSubscriber>());
        has_subscriber && tracing::enabled!(target: ASSERT_TARGET, Level::ERROR)
    }
}

impl DiagnosticSink for TracingSink {
    fn record(&self, failure: &AssertionFailure) {
        if Self::is_subscribed() {
            error!(
                target: ASSERT_TARGET,
                file = failure.location.file,
                line = failure.location.line,
                "{failure}"
            );
        } else {
            // Best effort; a closed stderr is not worth failing over.
            let _ = write_line(&mut io::stderr().lock(), failure);
        }
    }
}

/// The fallback diagnostic: exactly one line per failure.
fn write_line(out: &mut impl Write, failure: &AssertionFailure) -> io::Result<()> {
    writeln!(out, "{failure}")
}

/// Sink that keeps failures in memory, for tests and embedders that surface
/// diagnostics themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<AssertionFailure>>,
}

impl MemorySink {
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Mutex::new(Vec::new()) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<AssertionFailure> {
        self.records.lock().clone()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<AssertionFailure> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, failure: &AssertionFailure) {
        self.records.lock().push(failure.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_domain::SourceLocation;

    #[test]
    fn memory_sink_collects_and_drains() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record(&AssertionFailure::new("a", SourceLocation::caller()));
        sink.record(&AssertionFailure::new("b", SourceLocation::caller()));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[1].expression, "b");

        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn fallback_writes_one_line_per_failure() {
        let failure = AssertionFailure::new(
            "ready\n    && !closed",
            SourceLocation { file: "src/pool.rs", line: 41, column: 9 },
        );
        let mut out = Vec::new();
        write_line(&mut out, &failure).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "assertion failed: `ready && !closed` at src/pool.rs:41:9\n");
    }
}

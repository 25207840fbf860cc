//! Containment of unexpected panics.

use crate::assertion::{Asserter, InvariantViolation};
use plinth_domain::SourceLocation;
use std::any::Any;
use std::borrow::Cow;
use std::panic::{UnwindSafe, catch_unwind};

/// Runs `f`, turning an unwinding panic into a recorded assertion failure.
///
/// Returns `None` if `f` panicked. The failure is attributed to the caller of
/// `catch_all`, with the panic message as the expression text. With
/// `panic = "abort"` nothing can be caught and the process ends as usual.
#[track_caller]
pub fn catch_all<T>(f: impl FnOnce() -> T + UnwindSafe) -> Option<T> {
    catch_all_with(&Asserter::global(), f)
}

/// [`catch_all`] against an explicit [`Asserter`].
#[track_caller]
pub fn catch_all_with<T>(asserter: &Asserter<'_>, f: impl FnOnce() -> T + UnwindSafe) -> Option<T> {
    let location = SourceLocation::caller();
    match catch_unwind(f) {
        Ok(value) => Some(value),
        Err(payload) => {
            asserter.fail_at(format!("unhandled panic: {}", panic_message(payload.as_ref())), location);
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Cow<'_, str> {
    if let Some(violation) = payload.downcast_ref::<InvariantViolation>() {
        return Cow::Owned(violation.to_string());
    }
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .map_or(Cow::Borrowed("non-string payload"), Cow::Borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use plinth_debugger::GenericBackend;
    use plinth_domain::BuildConfig;

    const DEBUG: BuildConfig = BuildConfig { debug_build: true, ..BuildConfig::detected() };

    #[test]
    fn returns_value_without_recording() {
        let sink = MemorySink::new();
        let asserter = Asserter::new(&DEBUG, &GenericBackend, &sink);
        assert_eq!(catch_all_with(&asserter, || 7), Some(7));
        assert!(sink.is_empty());
    }

    #[test]
    fn panic_becomes_single_failure() {
        let sink = MemorySink::new();
        let asserter = Asserter::new(&DEBUG, &GenericBackend, &sink);

        let result: Option<u8> = catch_all_with(&asserter, || panic!("worker exploded: {}", 3));

        assert_eq!(result, None);
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expression, "unhandled panic: worker exploded: 3");
        assert!(records[0].location.file.ends_with("guard.rs"));
    }

    #[test]
    fn static_str_payloads_are_kept() {
        let payload: Box<dyn Any + Send> = Box::new("plain");
        assert_eq!(panic_message(payload.as_ref()), "plain");

        let opaque: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(opaque.as_ref()), "non-string payload");
    }

    #[test]
    fn nested_violation_keeps_its_message() {
        let config = DEBUG.with_failure_policy(plinth_domain::FailurePolicy::TerminateOnFailure);
        let inner_sink = MemorySink::new();
        let inner = Asserter::new(&config, &GenericBackend, &inner_sink);
        let sink = MemorySink::new();
        let outer = Asserter::new(&DEBUG, &GenericBackend, &sink);

        let result = catch_all_with(
            &outer,
            std::panic::AssertUnwindSafe(|| inner.check(|| false, "depth < 8")),
        );

        assert_eq!(result, None);
        let expression = &sink.records()[0].expression;
        assert!(
            expression.starts_with("unhandled panic: invariant violation: assertion failed: `depth < 8`"),
            "{expression}"
        );
    }
}

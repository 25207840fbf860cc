use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Source position of an assertion site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Location of the caller, following `#[track_caller]` frames.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self { file: location.file(), line: location.line(), column: location.column() }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A recorded invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionFailure {
    pub expression: Cow<'static, str>,
    pub location: SourceLocation,
}

impl AssertionFailure {
    pub fn new(expression: impl Into<Cow<'static, str>>, location: SourceLocation) -> Self {
        Self { expression: expression.into(), location }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("assertion failed: `")?;
        // Diagnostics are one line per failure.
        for (i, part) in self.expression.lines().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(part.trim())?;
        }
        write!(f, "` at {}", self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_points_at_this_file() {
        let here = SourceLocation::caller();
        assert!(here.file.ends_with("assertion.rs"));
        assert!(here.line > 0);
    }

    #[test]
    fn failure_renders_single_line() {
        let failure = AssertionFailure::new(
            "len > 0",
            SourceLocation { file: "src/lib.rs", line: 12, column: 5 },
        );
        let line = failure.to_string();
        assert_eq!(line, "assertion failed: `len > 0` at src/lib.rs:12:5");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn multiline_expressions_are_folded() {
        let failure = AssertionFailure::new(
            "a\n    && b",
            SourceLocation { file: "x.rs", line: 1, column: 1 },
        );
        assert_eq!(failure.to_string(), "assertion failed: `a && b` at x.rs:1:1");
    }
}

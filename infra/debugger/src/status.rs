//! Parsing of `/proc/<pid>/status`.

/// Extracts the `TracerPid` field from the contents of a `/proc/<pid>/status` file.
///
/// Returns `None` when the field is missing or malformed.
#[must_use]
pub fn tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|value| value.trim().parse().ok())
}

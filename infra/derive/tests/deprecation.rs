//! With `silence-deprecations` the whole file denies deprecation warnings, so
//! it only compiles if `#[deprecated_api]` emitted nothing.
#![cfg_attr(feature = "silence-deprecations", deny(deprecated))]

use plinth_derive::deprecated_api;

#[deprecated_api(since = "0.1.0", note = "use `Frame::len` instead")]
fn frame_len(frame: &[u8]) -> usize {
    frame.len()
}

#[deprecated_api]
struct LegacyHeader {
    tag: u8,
}

#[test]
#[cfg_attr(not(feature = "silence-deprecations"), allow(deprecated))]
fn deprecated_items_keep_working() {
    assert_eq!(frame_len(b"plinth"), 6);
    assert_eq!(LegacyHeader { tag: 4 }.tag, 4);
}

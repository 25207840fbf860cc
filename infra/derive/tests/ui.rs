#[test]
fn plinth_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/plinth_error_pass.rs");
    t.compile_fail("tests/ui/plinth_error_no_context.rs");
}

#[test]
fn layout_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/align_to_pass.rs");
    t.compile_fail("tests/ui/align_to_not_power_of_two.rs");
    t.compile_fail("tests/ui/align_to_zero.rs");
    t.compile_fail("tests/ui/packed_enum.rs");
}

#[test]
fn declaration_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/deprecated_api_pass.rs");
    t.pass("tests/ui/forced_inline_pass.rs");
}

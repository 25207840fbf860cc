use plinth::{AssertionOutcome, BuildConfig, FailurePolicy, KernelError};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_settings_file_installs_nothing() {
    let dir = tempdir().expect("temp dir");
    let err = plinth::init_from_settings(Some(dir.path().join("absent.toml")))
        .expect_err("settings file is required when given");

    assert!(matches!(err, KernelError::Config { .. }));
}

#[test]
#[serial]
fn settings_file_is_overlaid_and_installed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("plinth.toml");
    fs::write(&path, "force_debug = true\nfailure_policy = \"log_only\"\n").expect("write settings");

    let detected = BuildConfig::detected();
    let active = plinth::init_from_settings(Some(&path)).expect("first install");

    assert!(active.debug_build);
    assert_eq!(active.failure_policy, FailurePolicy::LogOnly);
    assert_eq!((active.os, active.compiler), (detected.os, detected.compiler));
    assert_eq!(plinth::build_config(), active);

    assert_eq!(plinth::invariant!(1 > 2), AssertionOutcome::Recorded);

    let err = plinth::init_from_settings(Some(&path)).expect_err("second install");
    assert!(matches!(err, KernelError::AlreadyInstalled { .. }));
}

#[test]
fn deprecation_flag_tracks_facade_feature() {
    assert_eq!(
        BuildConfig::detected().deprecation_warnings,
        !cfg!(feature = "silence-deprecations")
    );
}

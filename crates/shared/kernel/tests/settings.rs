use plinth_domain::{BuildConfig, FailurePolicy, PlatformSettings};
use plinth_kernel::KernelError;
use plinth_kernel::config::load_settings;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("plinth.toml");
    fs::write(&path, "log_assertions_in_release = true\nfailure_policy = \"terminate_on_failure\"\n")?;

    let settings = load_settings(Some(&path))?;
    assert_eq!(settings.log_assertions_in_release, Some(true));
    assert_eq!(settings.failure_policy, Some(FailurePolicy::TerminateOnFailure));
    assert_eq!(settings.force_debug, None);

    let cfg = BuildConfig::detected().with_settings(&settings);
    assert!(cfg.assertions_active());
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_settings(Some(dir.path().join("absent.toml"))).expect_err("file is required");
    assert!(matches!(err, KernelError::Config { .. }));
    assert!(err.to_string().contains("Failed to build settings"));
}

#[test]
fn unknown_policy_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("plinth.toml");
    fs::write(&path, "failure_policy = \"explode\"\n").expect("write settings");

    let err = load_settings(Some(&path)).expect_err("policy must be known");
    assert!(err.to_string().contains("Failed to deserialize settings"));
}

#[test]
fn no_file_yields_defaults() {
    let settings = load_settings(None::<&str>).expect("env-only settings");
    // Environment overrides are not set under the test harness.
    if std::env::var_os("PLINTH__FAILURE_POLICY").is_none() {
        assert_eq!(settings.failure_policy, PlatformSettings::default().failure_policy);
    }
}

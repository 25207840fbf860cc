use plinth_domain::config::{BuildConfig, FailurePolicy, PlatformSettings};
use plinth_domain::platform::{CompilerFamily, OsFamily};
use serde_json::json;

#[test]
fn detected_config_is_sane() {
    let cfg = BuildConfig::detected();
    assert_eq!(cfg.os, OsFamily::current());
    assert_eq!(cfg.compiler, CompilerFamily::current());
    assert_eq!(cfg.failure_policy, FailurePolicy::BreakOnFailure);
    assert_eq!(cfg.debug_build, cfg!(debug_assertions));
    assert_eq!(BuildConfig::default(), cfg);
}

#[test]
fn settings_overlay_keeps_target() {
    let base = BuildConfig::detected();
    let settings = PlatformSettings {
        force_debug: Some(false),
        log_assertions_in_release: Some(true),
        failure_policy: Some(FailurePolicy::TerminateOnFailure),
    };

    let cfg = base.with_settings(&settings);
    assert!(!cfg.debug_build);
    assert!(cfg.log_assertions_in_release);
    assert_eq!(cfg.failure_policy, FailurePolicy::TerminateOnFailure);
    assert_eq!(cfg.os, base.os);
    assert_eq!(cfg.compiler, base.compiler);
}

#[test]
fn empty_settings_change_nothing() {
    let base = BuildConfig::detected();
    assert_eq!(base.with_settings(&PlatformSettings::default()), base);
}

#[test]
fn settings_deserialize_snake_case() {
    let raw = json!({ "failure_policy": "log_only", "force_debug": true });
    let settings: PlatformSettings = serde_json::from_value(raw).expect("settings deserialize");
    assert_eq!(settings.failure_policy, Some(FailurePolicy::LogOnly));
    assert_eq!(settings.force_debug, Some(true));
    assert_eq!(settings.log_assertions_in_release, None);
}

#[test]
fn build_config_serializes_family_names() {
    let cfg = BuildConfig { os: OsFamily::MacOs, compiler: CompilerFamily::Clang, ..BuildConfig::detected() };
    let value = serde_json::to_value(cfg).expect("config serialize");
    assert_eq!(value["os"], "macos");
    assert_eq!(value["compiler"], "clang");
    assert_eq!(value["failure_policy"], "break_on_failure");
}

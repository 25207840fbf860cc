use plinth::{BuildConfig, FailurePolicy, KernelError};
use serial_test::serial;

const CONFIG: BuildConfig = BuildConfig { debug_build: true, ..BuildConfig::detected() }
    .with_failure_policy(FailurePolicy::LogOnly);

#[test]
#[serial]
fn init_installs_once() {
    let _ = plinth::init(CONFIG);
    assert_eq!(*plinth::build_config(), CONFIG);

    let err = plinth::init(BuildConfig::detected()).unwrap_err();
    assert!(matches!(err, KernelError::AlreadyInstalled { .. }));
    assert_eq!(*plinth::build_config(), CONFIG);
}

#[test]
#[serial]
fn failing_invariant_under_log_only_continues() {
    let _ = plinth::init(CONFIG);

    let outcome = plinth::invariant!(1 + 1 == 3);
    assert!(outcome.is_failure());
    assert!(plinth::invariant_failed!("unreachable branch").is_failure());
    assert_eq!(plinth::catch_all(|| -> u8 { panic!("boom") }), None);
}

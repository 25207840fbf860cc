use plinth_debugger::GenericBackend;
use plinth_domain::{BuildConfig, FailurePolicy};
use plinth_kernel::{ASSERT_TARGET, Asserter, AssertionOutcome, TracingSink};
use plinth_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn assertion_failure_lands_in_json_log() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("assertions")
        .console(false)
        .path(&log_dir)
        .json()
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.guard().is_some());
    assert!(TracingSink::is_subscribed());

    let config = BuildConfig { debug_build: true, ..BuildConfig::detected() }
        .with_failure_policy(FailurePolicy::LogOnly);
    let asserter = Asserter::new(&config, &GenericBackend, &TracingSink);
    let line = line!() + 1;
    let outcome = asserter.check(|| 0 > 1, "0 > 1");
    assert_eq!(outcome, AssertionOutcome::Recorded);

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let event = contents
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .find(|v| v["target"] == ASSERT_TARGET)
        .expect("assertion event should be logged");

    assert_eq!(event["level"], "ERROR");
    assert_eq!(event["fields"]["line"], line);
    assert!(event["fields"]["file"].as_str().is_some_and(|f| f.ends_with("file_logging.rs")));
    let message = event["fields"]["message"].as_str().unwrap_or_default();
    assert!(message.starts_with("assertion failed: `0 > 1` at "), "{message}");

    Ok(())
}

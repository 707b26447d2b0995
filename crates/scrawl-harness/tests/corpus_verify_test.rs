//! End-to-end: generate the builtin corpus to disk, reload it, verify it,
//! and emit the structured log.

use std::fs;
use std::path::PathBuf;

use scrawl_core::config::CheckMode;
use scrawl_harness::structured_log::{LogEmitter, LogEntry, sha256_hex};
use scrawl_harness::{FixtureSet, TestRunner, builtin_fixture_set};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scrawl-harness-{}-{name}", std::process::id()))
}

#[test]
fn corpus_survives_a_disk_round_trip_and_verifies() {
    let fixture_path = scratch_path("corpus.json");
    let json = builtin_fixture_set().to_json().unwrap();
    fs::write(&fixture_path, &json).unwrap();

    let set = FixtureSet::from_file(&fixture_path).unwrap();
    assert_eq!(set.cases.len(), builtin_fixture_set().cases.len());

    let results = TestRunner::new("e2e", CheckMode::Strict).run(&set);
    assert!(results.iter().all(|r| r.passed), "{results:?}");

    fs::remove_file(&fixture_path).unwrap();
}

#[test]
fn verification_log_lines_carry_the_fixture_digest() {
    let log_path = scratch_path("verify.jsonl");
    let set = builtin_fixture_set();
    let json = set.to_json().unwrap();
    let digest = sha256_hex(json.as_bytes());

    let results = TestRunner::new("e2e", CheckMode::Strict).run(&set);
    {
        let mut emitter = LogEmitter::to_file(&log_path).unwrap();
        for result in &results {
            let entry = LogEntry::from_result("t0", "e2e", result, Some(&digest));
            emitter.emit(&entry).unwrap();
        }
    }

    let text = fs::read_to_string(&log_path).unwrap();
    assert_eq!(text.lines().count(), results.len());
    for line in text.lines() {
        let entry: LogEntry = serde_json::from_str(line).unwrap();
        assert_eq!(entry.fixture_sha256.as_deref(), Some(digest.as_str()));
    }

    fs::remove_file(&log_path).unwrap();
}

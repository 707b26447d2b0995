//! CLI entrypoint for the scrawl conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use scrawl_core::config::CheckMode;
use scrawl_harness::structured_log::{LogEmitter, LogEntry, sha256_hex};
use scrawl_harness::{FixtureSet, HarnessError, TestRunner, builtin_fixture_set};

/// Conformance tooling for the scrawl formatting engine.
#[derive(Debug, Parser)]
#[command(name = "scrawl-harness")]
#[command(about = "Conformance harness for the scrawl formatting engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the builtin fixture corpus as a fixture JSON file.
    Generate {
        /// Output path for the fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the engine against a fixture file.
    Verify {
        /// Fixture JSON path.
        #[arg(long)]
        fixture: PathBuf,
        /// Check mode to run under (strict or lenient).
        #[arg(long, default_value = "strict")]
        mode: String,
        /// Optional JSONL structured log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed timestamp string for deterministic log output.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(failures) if failures == 0 => ExitCode::SUCCESS,
        Ok(failures) => {
            eprintln!("{failures} case(s) failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("harness error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<usize, HarnessError> {
    match command {
        Command::Generate { output } => {
            let set = builtin_fixture_set();
            std::fs::write(&output, set.to_json()?).map_err(|source| {
                HarnessError::FixtureIo {
                    path: output.clone(),
                    source,
                }
            })?;
            println!(
                "wrote {} cases ({}) to {}",
                set.cases.len(),
                set.family,
                output.display()
            );
            Ok(0)
        }
        Command::Verify {
            fixture,
            mode,
            log,
            timestamp,
        } => {
            let set = FixtureSet::from_file(&fixture)?;
            let fixture_bytes =
                std::fs::read(&fixture).map_err(|source| HarnessError::FixtureIo {
                    path: fixture.clone(),
                    source,
                })?;
            let fixture_digest = sha256_hex(&fixture_bytes);

            let check_mode = CheckMode::from_str_loose(&mode);
            let campaign = format!("{}@{mode}", set.family);
            let runner = TestRunner::new(campaign.clone(), check_mode);
            let results = runner.run(&set);

            let timestamp = timestamp.unwrap_or_else(unix_timestamp);
            let mut emitter = match log {
                Some(path) => Some(LogEmitter::to_file(&path)?),
                None => None,
            };

            let mut failures = 0usize;
            for result in &results {
                if let Some(emitter) = emitter.as_mut() {
                    let entry = LogEntry::from_result(
                        &timestamp,
                        &campaign,
                        result,
                        Some(&fixture_digest),
                    );
                    emitter.emit(&entry)?;
                }
                if result.passed {
                    println!("PASS {}", result.case_name);
                } else {
                    failures += 1;
                    println!("FAIL {}", result.case_name);
                    if let Some(diff) = &result.diff {
                        println!("{diff}");
                    }
                }
            }
            println!(
                "{} passed, {} failed ({} cases, mode {mode})",
                results.len() - failures,
                failures,
                results.len()
            );
            Ok(failures)
        }
    }
}

fn unix_timestamp() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("{seconds}")
}

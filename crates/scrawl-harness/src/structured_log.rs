//! Structured JSONL logging for harness runs.
//!
//! One JSON object per line, suitable for log aggregation across local runs
//! and CI. Entries can carry a SHA-256 of the fixture file they were
//! produced from so a log line is traceable to the exact corpus bytes.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HarnessError;
use crate::runner::VerificationResult;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
}

/// Verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
}

/// Canonical JSONL log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub campaign: String,
    pub case_name: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_sha256: Option<String>,
}

impl LogEntry {
    /// Build a log entry from one verification result.
    #[must_use]
    pub fn from_result(
        timestamp: &str,
        campaign: &str,
        result: &VerificationResult,
        fixture_sha256: Option<&str>,
    ) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            level: if result.passed {
                LogLevel::Info
            } else {
                LogLevel::Error
            },
            campaign: campaign.to_string(),
            case_name: result.case_name.clone(),
            outcome: if result.passed {
                Outcome::Pass
            } else {
                Outcome::Fail
            },
            detail: result.diff.clone(),
            fixture_sha256: fixture_sha256.map(str::to_string),
        }
    }
}

/// Writes JSONL lines to any writer.
pub struct LogEmitter<W: Write> {
    writer: W,
}

impl LogEmitter<File> {
    pub fn to_file(path: &Path) -> Result<Self, HarnessError> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> LogEmitter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), HarnessError> {
        let line = serde_json::to_string(entry)?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Hex-encoded SHA-256 of a byte buffer.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

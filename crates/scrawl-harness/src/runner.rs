//! Fixture execution engine.
//!
//! Runs every case in a fixture set against a memory-bound stream under the
//! requested check mode and collects verification results. Abort cases are
//! executed behind `catch_unwind` so the reported reason can be compared
//! against the expectation.

use std::panic::{self, AssertUnwindSafe};

use scrawl_core::config::CheckMode;
use scrawl_core::fmt::{FormatArgs, MemoryTransport, OutStream};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};

/// Outcome of one fixture case.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    pub diff: Option<String>,
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Check mode being exercised.
    pub mode: CheckMode,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: CheckMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all fixtures in the set that target this runner's mode.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .filter(|case| mode_matches(self.mode, &case.mode))
            .map(|case| self.run_case(case))
            .collect()
    }

    fn run_case(&self, case: &FixtureCase) -> VerificationResult {
        let (passed, actual) = if case.expect_abort {
            self.run_abort_case(case)
        } else {
            let actual = execute_format(case, self.mode);
            (actual == case.expected_output, actual)
        };
        let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
        VerificationResult {
            case_name: case.name.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        }
    }

    /// An abort case passes when strict checks panic with the expected
    /// reason. Under lenient checks the same case must NOT abort.
    fn run_abort_case(&self, case: &FixtureCase) -> (bool, String) {
        let mode = self.mode;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| execute_format(case, mode)));
        match outcome {
            Err(payload) => {
                let reason = panic_reason(payload.as_ref());
                (
                    mode.is_strict() && reason.contains(&case.expected_output),
                    reason,
                )
            }
            Ok(output) => (!mode.is_strict(), output),
        }
    }
}

fn mode_matches(active: CheckMode, case_mode: &str) -> bool {
    case_mode.eq_ignore_ascii_case("both") || CheckMode::from_str_loose(case_mode) == active
}

/// Format one case into a fresh memory-bound stream.
///
/// The argument list length is only known at runtime, so this walks the
/// format string one directive per argument via `format_step` and lets the
/// empty-tuple tail handle whatever remains.
pub fn execute_format(case: &FixtureCase, mode: CheckMode) -> String {
    let mut out = OutStream::with_checks(MemoryTransport::new(), mode);
    let mut fmt: &[u8] = case.format.as_bytes();
    for arg in &case.args {
        fmt = out.format_step(fmt, arg);
    }
    ().format_into(fmt, &mut out);
    out.into_transport().text()
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("<non-string panic payload>")
    }
}

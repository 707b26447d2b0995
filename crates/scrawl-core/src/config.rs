//! Runtime check-mode configuration.
//!
//! The check mode is set via the `SCRAWL_FMT_CHECKS` environment variable:
//! - `strict` (default): malformed directives and renderer precondition
//!   violations abort the process through the panic facility, reporting the
//!   offending reason.
//! - `lenient`: a malformed directive is skipped — its bytes and its argument
//!   are consumed and nothing is emitted for it.
//!
//! Streams capture the mode at construction and can override it with
//! [`crate::fmt::OutStream::with_checks`], so both behaviors stay testable
//! inside one process.

use std::sync::OnceLock;

/// How the engine reacts to malformed directives and precondition violations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMode {
    /// Abort through the panic facility with the offending reason.
    #[default]
    Strict,
    /// Skip the malformed directive and emit nothing for it.
    Lenient,
}

impl CheckMode {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "lenient" | "off" | "none" | "disabled" => Self::Lenient,
            _ => Self::Strict,
        }
    }

    /// Returns true if violations abort the process.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

static GLOBAL_MODE: OnceLock<CheckMode> = OnceLock::new();

/// Get the configured check mode (reads the env var on first call, caches
/// thereafter).
#[must_use]
pub fn check_mode() -> CheckMode {
    *GLOBAL_MODE.get_or_init(|| {
        std::env::var("SCRAWL_FMT_CHECKS")
            .map(|v| CheckMode::from_str_loose(&v))
            .unwrap_or_default()
    })
}

//! # scrawl-harness
//!
//! Conformance tooling for the scrawl formatting engine.
//!
//! Provides:
//! - [`FixtureSet`] / [`FixtureCase`]: JSON fixture files describing format
//!   calls and their expected bytes;
//! - [`ArgValue`]: type-erased renderable argument values for fixtures;
//! - [`TestRunner`]: executes a fixture set against a memory-bound stream
//!   under a chosen check mode;
//! - [`structured_log`]: JSONL log records with fixture SHA-256 traceability;
//! - the `harness` binary: `generate` the builtin corpus, `verify` a
//!   fixture file.

pub mod builtin;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod runner;
pub mod structured_log;

pub use builtin::builtin_fixture_set;
pub use error::HarnessError;
pub use fixtures::{ArgValue, FixtureCase, FixtureSet};
pub use runner::{TestRunner, VerificationResult};

//! Fixture loading and management.
//!
//! A fixture case is one format call: a format string, a list of marshaled
//! argument values, and the bytes the engine must produce (or, for abort
//! cases, the reason the strict checks must report).

use std::path::Path;

use serde::{Deserialize, Serialize};

use scrawl_core::fmt::{Directive, OutStream, Renderable, Transport};

use crate::error::HarnessError;

/// A format argument value marshaled from fixture JSON.
///
/// This is the type-erased counterpart of the engine's static dispatch:
/// each variant forwards to the built-in rendering for the corresponding
/// argument kind, so fixture files can exercise every dispatch path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ArgValue {
    Int(i64),
    Uint(u64),
    Str(String),
    Bool(bool),
    Char(char),
    Addr(u64),
}

impl Renderable for ArgValue {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        match self {
            ArgValue::Int(v) => v.render(out),
            ArgValue::Uint(v) => v.render(out),
            ArgValue::Str(v) => out.write_str(v),
            ArgValue::Bool(v) => out.write_bool(*v),
            ArgValue::Char(v) => out.write_char(*v),
            ArgValue::Addr(v) => out.write_addr(*v as usize),
        }
    }

    fn is_integer(&self) -> bool {
        matches!(self, ArgValue::Int(_) | ArgValue::Uint(_))
    }

    fn render_directive<T: Transport>(&self, out: &mut OutStream<T>, directive: &Directive) {
        match self {
            ArgValue::Int(v) => v.render_directive(out, directive),
            ArgValue::Uint(v) => v.render_directive(out, directive),
            _ => self.render(out),
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// The format string under test.
    pub format: String,
    /// Marshaled arguments, one per directive.
    pub args: Vec<ArgValue>,
    /// Expected output bytes; for abort cases, a substring of the reason.
    pub expected_output: String,
    /// Which check mode the case targets: `strict`, `lenient`, or `both`.
    pub mode: String,
    /// Whether strict checks must abort instead of producing output.
    #[serde(default)]
    pub expect_abort: bool,
}

/// A collection of fixture cases for one corpus family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Corpus family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_core::config::CheckMode;
    use scrawl_core::fmt::MemoryTransport;

    #[test]
    fn arg_values_round_trip_through_json() {
        let args = vec![
            ArgValue::Int(-5),
            ArgValue::Uint(7),
            ArgValue::Str("ok".into()),
            ArgValue::Bool(true),
            ArgValue::Char('x'),
            ArgValue::Addr(0xBEEF),
        ];
        let json = serde_json::to_string(&args).unwrap();
        let back: Vec<ArgValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(args, back);
    }

    #[test]
    fn arg_value_tags_are_stable() {
        let json = serde_json::to_string(&ArgValue::Int(-5)).unwrap();
        assert_eq!(json, r#"{"type":"int","value":-5}"#);
        let json = serde_json::to_string(&ArgValue::Str("ok".into())).unwrap();
        assert_eq!(json, r#"{"type":"str","value":"ok"}"#);
    }

    #[test]
    fn arg_values_render_like_the_builtins() {
        let mut out = OutStream::with_checks(MemoryTransport::new(), CheckMode::Strict);
        out.format(
            "%d %x %s %s",
            (
                ArgValue::Int(-42),
                ArgValue::Uint(255),
                ArgValue::Bool(false),
                ArgValue::Str("tail".into()),
            ),
        );
        assert_eq!(out.into_transport().text(), "-42 ff false tail");
    }

    #[test]
    fn only_numeric_variants_classify_as_integers() {
        assert!(ArgValue::Int(1).is_integer());
        assert!(ArgValue::Uint(1).is_integer());
        assert!(!ArgValue::Str("1".into()).is_integer());
        assert!(!ArgValue::Bool(true).is_integer());
        assert!(!ArgValue::Char('1').is_integer());
        assert!(!ArgValue::Addr(1).is_integer());
    }

    #[test]
    fn fixture_sets_parse_from_json() {
        let set = FixtureSet::from_json(
            r#"{
                "version": "v1",
                "family": "fmt/padding",
                "cases": [
                    {
                        "name": "pad_right_aligned",
                        "format": "%5d",
                        "args": [{"type": "int", "value": 3}],
                        "expected_output": "    3",
                        "mode": "both"
                    }
                ]
            }"#,
        )
        .expect("valid fixture json");
        assert_eq!(set.cases.len(), 1);
        assert_eq!(set.cases[0].args, vec![ArgValue::Int(3)]);
        assert!(!set.cases[0].expect_abort);
    }
}

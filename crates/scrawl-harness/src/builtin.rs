//! The builtin conformance corpus.
//!
//! Covers the mini-language's stable surface: radix selection, sign and
//! grouping, width padding on every side, escapes, multi-argument
//! recursion, the lenient fallback, and the strict abort reasons.

use crate::fixtures::{ArgValue, FixtureCase, FixtureSet};

/// Current corpus schema version.
pub const CORPUS_VERSION: &str = "v1";

fn case(
    name: &str,
    format: &str,
    args: Vec<ArgValue>,
    expected: &str,
    mode: &str,
) -> FixtureCase {
    FixtureCase {
        name: name.into(),
        format: format.into(),
        args,
        expected_output: expected.into(),
        mode: mode.into(),
        expect_abort: false,
    }
}

fn abort_case(name: &str, format: &str, args: Vec<ArgValue>, reason: &str) -> FixtureCase {
    FixtureCase {
        name: name.into(),
        format: format.into(),
        args,
        expected_output: reason.into(),
        mode: "strict".into(),
        expect_abort: true,
    }
}

/// Build the builtin fixture corpus.
#[must_use]
pub fn builtin_fixture_set() -> FixtureSet {
    let cases = vec![
        // Radix selection.
        case("decimal", "%d", vec![ArgValue::Int(42)], "42", "both"),
        case("hex_lower", "%x", vec![ArgValue::Uint(48879)], "beef", "both"),
        case("hex_upper", "%X", vec![ArgValue::Uint(48879)], "BEEF", "both"),
        case("octal", "%o", vec![ArgValue::Uint(64)], "100", "both"),
        case("binary", "%b", vec![ArgValue::Uint(10)], "1010", "both"),
        case("zero_value", "%d", vec![ArgValue::Int(0)], "0", "both"),
        // Sign handling.
        case("negative", "%d", vec![ArgValue::Int(-42)], "-42", "both"),
        case("forced_sign", "%+d", vec![ArgValue::Int(42)], "+42", "both"),
        case(
            "forced_sign_negative",
            "%+d",
            vec![ArgValue::Int(-42)],
            "-42",
            "both",
        ),
        // Grouping.
        case(
            "grouped_millions",
            "%,d",
            vec![ArgValue::Int(1_234_567)],
            "1,234,567",
            "both",
        ),
        case(
            "grouped_thousand",
            "%,d",
            vec![ArgValue::Int(1_000)],
            "1,000",
            "both",
        ),
        case(
            "grouping_short_run",
            "%,d",
            vec![ArgValue::Int(100)],
            "100",
            "both",
        ),
        // Width padding.
        case("pad_left", "%5d", vec![ArgValue::Int(3)], "    3", "both"),
        case("pad_right", "%-5d", vec![ArgValue::Int(3)], "3    ", "both"),
        case("pad_zero", "%05d", vec![ArgValue::Int(3)], "00003", "both"),
        case(
            "pad_string",
            "%8s|",
            vec![ArgValue::Str("abc".into())],
            "     abc|",
            "both",
        ),
        case(
            "pad_never_truncates",
            "%2d",
            vec![ArgValue::Int(12_345)],
            "12345",
            "both",
        ),
        // Escapes and recursion.
        case("escaped_percent", "%%", vec![], "%", "both"),
        case(
            "multi_argument",
            "%d-%s",
            vec![ArgValue::Int(1), ArgValue::Str("ok".into())],
            "1-ok",
            "both",
        ),
        case(
            "unformatted_tail",
            "%d then tail",
            vec![ArgValue::Int(9)],
            "9 then tail",
            "both",
        ),
        // Generic dispatch.
        case("bool_true", "%s", vec![ArgValue::Bool(true)], "true", "both"),
        case("bool_false", "%s", vec![ArgValue::Bool(false)], "false", "both"),
        case("char", "%s", vec![ArgValue::Char('/')], "/", "both"),
        // Lenient fallback: the malformed directive is dropped, its
        // argument consumed, surrounding literals preserved.
        case(
            "lenient_duplicate_flag",
            "a%00db",
            vec![ArgValue::Int(1)],
            "ab",
            "lenient",
        ),
        case(
            "lenient_sign_on_hex",
            "x%+xy",
            vec![ArgValue::Int(1)],
            "xy",
            "lenient",
        ),
        case(
            "lenient_numeric_flag_on_string",
            "<%05s>",
            vec![ArgValue::Str("no".into())],
            "<>",
            "lenient",
        ),
        // Strict abort reasons.
        abort_case(
            "abort_missing_width",
            "%-d",
            vec![ArgValue::Int(1)],
            "missing format width",
        ),
        abort_case(
            "abort_sign_on_hex",
            "%+x",
            vec![ArgValue::Int(1)],
            "expects decimal formatting",
        ),
        abort_case(
            "abort_duplicate_flag",
            "%00d",
            vec![ArgValue::Int(1)],
            "duplicate format flag",
        ),
        abort_case(
            "abort_missing_specifier",
            "%5",
            vec![ArgValue::Int(1)],
            "expected type specifier",
        ),
    ];

    FixtureSet {
        version: CORPUS_VERSION.into(),
        family: "fmt/mini-language".into(),
        cases,
    }
}

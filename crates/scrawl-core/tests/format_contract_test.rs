//! Contract matrix for the formatting mini-language.
//!
//! Exercises the directive grammar end to end through a memory-bound
//! stream: literals, escapes, radix selection, sign and grouping flags,
//! width padding on every side, multi-argument recursion, and the lenient
//! fallback for malformed directives.

use scrawl_core::config::CheckMode;
use scrawl_core::fmt::{FormatArgs, MemoryTransport, OutStream, Renderable, Transport};

fn render<A: FormatArgs>(fmt: &str, args: A) -> String {
    render_with(CheckMode::Strict, fmt, args)
}

fn render_with<A: FormatArgs>(checks: CheckMode, fmt: &str, args: A) -> String {
    let mut out = OutStream::with_checks(MemoryTransport::new(), checks);
    out.format(fmt, args);
    out.into_transport().text()
}

struct Case {
    name: &'static str,
    fmt: &'static str,
    arg: i64,
    expected: &'static str,
}

#[test]
fn integer_directive_matrix() {
    let cases = [
        Case {
            name: "plain_decimal",
            fmt: "%d",
            arg: 42,
            expected: "42",
        },
        Case {
            name: "negative_decimal",
            fmt: "%d",
            arg: -42,
            expected: "-42",
        },
        Case {
            name: "forced_sign",
            fmt: "%+d",
            arg: 42,
            expected: "+42",
        },
        Case {
            name: "forced_sign_stays_minus",
            fmt: "%+d",
            arg: -42,
            expected: "-42",
        },
        Case {
            name: "grouped_millions",
            fmt: "%,d",
            arg: 1_234_567,
            expected: "1,234,567",
        },
        Case {
            name: "grouped_thousand",
            fmt: "%,d",
            arg: 1_000,
            expected: "1,000",
        },
        Case {
            name: "grouping_skips_short_runs",
            fmt: "%,d",
            arg: 100,
            expected: "100",
        },
        Case {
            name: "hex_lower",
            fmt: "%x",
            arg: 0xBEEF,
            expected: "beef",
        },
        Case {
            name: "hex_upper",
            fmt: "%X",
            arg: 0xBEEF,
            expected: "BEEF",
        },
        Case {
            name: "octal",
            fmt: "%o",
            arg: 64,
            expected: "100",
        },
        Case {
            name: "binary",
            fmt: "%b",
            arg: 10,
            expected: "1010",
        },
        Case {
            name: "width_right_aligned",
            fmt: "%5d",
            arg: 3,
            expected: "    3",
        },
        Case {
            name: "width_left_justified",
            fmt: "%-5d",
            arg: 3,
            expected: "3    ",
        },
        Case {
            name: "width_zero_filled",
            fmt: "%05d",
            arg: 3,
            expected: "00003",
        },
        Case {
            name: "width_never_truncates",
            fmt: "%3d",
            arg: 123_456,
            expected: "123456",
        },
        Case {
            name: "zero_renders_once",
            fmt: "%d",
            arg: 0,
            expected: "0",
        },
        Case {
            name: "zero_flag_without_width_is_inert",
            fmt: "%0d",
            arg: 42,
            expected: "42",
        },
    ];
    for case in cases {
        assert_eq!(
            render(case.fmt, (case.arg,)),
            case.expected,
            "case `{}` failed",
            case.name,
        );
    }
}

#[test]
fn literal_and_escape_handling() {
    assert_eq!(render("%%", ()), "%");
    assert_eq!(render("100%%", ()), "100%");
    assert_eq!(render("%d%%", (5,)), "5%");
    assert_eq!(render("no directives at all", ()), "no directives at all");
}

#[test]
fn multi_argument_recursion_and_tail() {
    assert_eq!(render("%d-%s", (1, "ok")), "1-ok");
    assert_eq!(
        render("%s=%d (%x) done", ("len", 255, 255u32)),
        "len=255 (ff) done"
    );
    assert_eq!(render("%d trailing %s tail", (1, "mid")), "1 trailing mid tail");
}

#[test]
fn string_directive_padding() {
    assert_eq!(render("%8s|", ("abc",)), "     abc|");
    assert_eq!(render("%-8s|", ("abc",)), "abc     |");
    assert_eq!(render("%2s|", ("abcdef",)), "abcdef|");
}

#[test]
fn boolean_and_char_arguments() {
    assert_eq!(render("flag=%s", (true,)), "flag=true");
    assert_eq!(render("flag=%s", (false,)), "flag=false");
    assert_eq!(render("sep=%s", ('/',)), "sep=/");
}

#[test]
fn pointer_rendering_width_contract() {
    let addr = 0x1234usize as *const u8;
    let rendered = render("%s", (addr,));
    assert_eq!(rendered.len(), 2 * size_of::<usize>());
    assert!(rendered.ends_with("1234"));
    assert!(rendered.starts_with('0'));
}

#[test]
fn user_defined_types_participate_without_layout_knowledge() {
    struct Version {
        major: u32,
        minor: u32,
        patch: u32,
    }
    impl Renderable for Version {
        fn render<T: Transport>(&self, out: &mut OutStream<T>) {
            out.format("v%d.%d.%d", (self.major, self.minor, self.patch));
        }
    }

    let version = Version {
        major: 1,
        minor: 4,
        patch: 0,
    };
    assert_eq!(render("release %s ready", (&version,)), "release v1.4.0 ready");
}

#[test]
fn formatln_appends_a_newline() {
    let mut out = OutStream::with_checks(MemoryTransport::new(), CheckMode::Strict);
    out.formatln("%d", (7,));
    assert_eq!(out.into_transport().text(), "7\n");
}

#[test]
fn streams_do_not_share_padding_state() {
    let mut first = OutStream::with_checks(MemoryTransport::new(), CheckMode::Strict);
    let mut second = OutStream::with_checks(MemoryTransport::new(), CheckMode::Strict);
    // Install a pad on `first` only; `second` must be unaffected.
    struct Silent;
    impl Renderable for Silent {
        fn render<T: Transport>(&self, _out: &mut OutStream<T>) {}
    }
    first.format("%5s", (&Silent,));
    second.write_str("x");
    first.write_str("y");
    assert_eq!(second.into_transport().text(), "x");
    assert_eq!(first.into_transport().text(), "    y");
}

#[test]
fn lenient_mode_drops_malformed_directives_only() {
    assert_eq!(
        render_with(CheckMode::Lenient, "a%00db%dc", (1, 2)),
        "ab2c"
    );
    assert_eq!(render_with(CheckMode::Lenient, "x%+xy", (1,)), "xy");
    assert_eq!(render_with(CheckMode::Lenient, "%-d!", (1,)), "!");
    // A numeric flag on a non-integer argument drops the directive too.
    assert_eq!(render_with(CheckMode::Lenient, "<%05s>", ("no",)), "<>");
}

#[test]
#[should_panic(expected = "missing format width")]
fn strict_mode_reports_missing_width() {
    render("%-d", (1,));
}

#[test]
#[should_panic(expected = "format flag `+` expects decimal formatting")]
fn strict_mode_reports_sign_radix_conflict() {
    render("%+x", (1,));
}

#[test]
#[should_panic(expected = "duplicate format flag `0`")]
fn strict_mode_reports_duplicate_flags() {
    render("%00d", (1,));
}

#[test]
#[should_panic(expected = "formatting expects integer argument")]
fn strict_mode_rejects_zero_fill_on_strings() {
    render("%05s", ("no",));
}

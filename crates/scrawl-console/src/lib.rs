//! # scrawl-console
//!
//! Process-wide standard-output and standard-error streams for the scrawl
//! runtime, plus terminal color control.
//!
//! The two streams are explicit singletons: constructed once on first use,
//! owned for the life of the process, and never reconstructed. Each one
//! wraps an [`OutStream`] over a [`ConsoleTransport`] in a mutex so that
//! padding state is serialized behind one logical writer.
//!
//! The free functions mirror the stream surface (`print`, `println`,
//! `eprint`, `eprintln`); the [`out!`], [`outln!`], [`err!`], and [`errln!`]
//! macros build the argument tuple:
//!
//! ```no_run
//! use scrawl_console::outln;
//!
//! outln!("compiled %d units in %s", 12, "0.4s");
//! ```

mod color;
mod console;

pub use color::{TermColor, set_terminal_color};
pub use console::{Category, ConsoleTransport};

use std::sync::OnceLock;

use parking_lot::Mutex;
use scrawl_core::fmt::{FormatArgs, OutStream, Renderable};

type ConsoleStream = OutStream<ConsoleTransport>;

static STDOUT_STREAM: OnceLock<Mutex<ConsoleStream>> = OnceLock::new();
static STDERR_STREAM: OnceLock<Mutex<ConsoleStream>> = OnceLock::new();

/// The process-wide standard-output stream.
pub fn stdout_stream() -> &'static Mutex<ConsoleStream> {
    STDOUT_STREAM
        .get_or_init(|| Mutex::new(OutStream::new(ConsoleTransport::new(Category::Stdout))))
}

/// The process-wide standard-error stream.
pub fn stderr_stream() -> &'static Mutex<ConsoleStream> {
    STDERR_STREAM
        .get_or_init(|| Mutex::new(OutStream::new(ConsoleTransport::new(Category::Stderr))))
}

// ===------------------------------------------------------
// Standard output

/// Print a formatted string to standard output.
pub fn print<A: FormatArgs>(fmt: &str, args: A) {
    stdout_stream().lock().format(fmt, args);
}

/// Print a formatted string to standard output with a trailing newline.
pub fn println<A: FormatArgs>(fmt: &str, args: A) {
    stdout_stream().lock().formatln(fmt, args);
}

/// Print a single value to standard output.
pub fn print_value<V: Renderable + ?Sized>(value: &V) {
    stdout_stream().lock().write_value(value);
}

/// Print a single value to standard output with a trailing newline.
pub fn println_value<V: Renderable + ?Sized>(value: &V) {
    let mut out = stdout_stream().lock();
    out.write_value(value);
    out.newline();
}

/// Print a newline to standard output.
pub fn newline() {
    stdout_stream().lock().newline();
}

// ===------------------------------------------------------
// Standard error

/// Print a formatted string to standard error.
pub fn eprint<A: FormatArgs>(fmt: &str, args: A) {
    stderr_stream().lock().format(fmt, args);
}

/// Print a formatted string to standard error with a trailing newline.
pub fn eprintln<A: FormatArgs>(fmt: &str, args: A) {
    stderr_stream().lock().formatln(fmt, args);
}

/// Print a single value to standard error.
pub fn eprint_value<V: Renderable + ?Sized>(value: &V) {
    stderr_stream().lock().write_value(value);
}

/// Print a single value to standard error with a trailing newline.
pub fn eprintln_value<V: Renderable + ?Sized>(value: &V) {
    let mut out = stderr_stream().lock();
    out.write_value(value);
    out.newline();
}

/// Print a newline to standard error.
pub fn enewline() {
    stderr_stream().lock().newline();
}

/// Format to standard output.
#[macro_export]
macro_rules! out {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::print($fmt, ($($arg,)*))
    };
}

/// Format to standard output with a trailing newline.
#[macro_export]
macro_rules! outln {
    () => {
        $crate::newline()
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::println($fmt, ($($arg,)*))
    };
}

/// Format to standard error.
#[macro_export]
macro_rules! err {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::eprint($fmt, ($($arg,)*))
    };
}

/// Format to standard error with a trailing newline.
#[macro_export]
macro_rules! errln {
    () => {
        $crate::enewline()
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::eprintln($fmt, ($($arg,)*))
    };
}

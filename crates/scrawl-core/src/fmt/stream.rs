//! The output stream: padding controller, literal scanning, and dispatch.
//!
//! An [`OutStream`] owns the pending padding state and the configured check
//! mode, and delegates byte delivery to its [`Transport`]. Every write path
//! funnels through one choke point, `write_run`, where the padding requested
//! by the most recent directive is applied and cleared.

use std::mem;

use crate::config::{self, CheckMode};

use super::digits::{self, SCRATCH_LEN};
use super::directive::{self, Directive};
use super::error::FormatError;
use super::render::{FormatArgs, Renderable};
use super::transport::Transport;

/// Fill request installed by a width directive, consumed by the next run.
///
/// At most one side is ever pending; the variant encodes that invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum PendingPad {
    #[default]
    None,
    Left { width: usize, fill: u8 },
    Right { width: usize, fill: u8 },
}

/// A formatted output stream over an arbitrary transport.
///
/// Each instance has independent padding state; streams are deliberately not
/// cloneable. A stream is single-writer — callers serialize access.
pub struct OutStream<T: Transport> {
    transport: T,
    pending: PendingPad,
    checks: CheckMode,
}

impl<T: Transport> OutStream<T> {
    /// Create a stream using the process-wide check mode.
    pub fn new(transport: T) -> Self {
        Self::with_checks(transport, config::check_mode())
    }

    /// Create a stream with an explicit check mode.
    #[must_use]
    pub const fn with_checks(transport: T, checks: CheckMode) -> Self {
        Self {
            transport,
            pending: PendingPad::None,
            checks,
        }
    }

    #[must_use]
    pub fn checks(&self) -> CheckMode {
        self.checks
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Direct transport access; bytes written here bypass the padding
    /// controller.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    // -----------------------------------------------------------------------
    // Write primitives
    // -----------------------------------------------------------------------

    pub fn write_str(&mut self, s: &str) {
        self.write_run(s.as_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_run(bytes);
    }

    /// Render an unsigned magnitude under `radix` (2..=36).
    pub fn write_u64(&mut self, value: u64, radix: u32, lowercase: bool, separators: bool) {
        if !(digits::MIN_RADIX..=digits::MAX_RADIX).contains(&radix) {
            self.fail(FormatError::InvalidRadix(radix));
            return;
        }
        let mut scratch = [0u8; SCRATCH_LEN];
        let count = digits::render_digits(value, radix, lowercase, separators, &mut scratch);
        self.write_run(&scratch[SCRATCH_LEN - count..]);
    }

    /// Render a signed decimal value. The sign is its own run, so a pending
    /// pad is consumed by the sign when one is emitted.
    pub fn write_i64(&mut self, value: i64, include_plus: bool, separators: bool) {
        if value < 0 {
            self.write_run(b"-");
        } else if include_plus {
            self.write_run(b"+");
        }
        self.write_u64(value.unsigned_abs(), 10, false, separators);
    }

    pub fn write_bool(&mut self, value: bool) {
        let word: &[u8] = if value { b"true" } else { b"false" };
        self.write_run(word);
    }

    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.write_run(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Render a pointer address: zero-padded uppercase hexadecimal, exactly
    /// twice the native pointer byte-width.
    pub fn write_addr(&mut self, addr: usize) {
        const ADDR_CHARS: usize = 2 * mem::size_of::<usize>();
        let mut scratch = [0u8; SCRATCH_LEN];
        let count = digits::render_digits(addr as u64, 16, false, false, &mut scratch);
        let mut out = [b'0'; ADDR_CHARS];
        out[ADDR_CHARS - count..].copy_from_slice(&scratch[SCRATCH_LEN - count..]);
        self.write_run(&out);
    }

    /// Write a value through its [`Renderable`] capability.
    pub fn write_value<V: Renderable + ?Sized>(&mut self, value: &V) {
        value.render(self);
    }

    pub fn newline(&mut self) {
        self.write_run(b"\n");
    }

    // -----------------------------------------------------------------------
    // Formatting
    // -----------------------------------------------------------------------

    /// Format `fmt`, consuming one directive per argument.
    pub fn format<A: FormatArgs>(&mut self, fmt: &str, args: A) {
        args.format_into(fmt.as_bytes(), self);
    }

    /// [`format`](Self::format) followed by a newline.
    pub fn formatln<A: FormatArgs>(&mut self, fmt: &str, args: A) {
        self.format(fmt, args);
        self.newline();
    }

    /// One step of the variadic recursion: emit literals up to the next
    /// directive, render `arg` under it, and return the unscanned remainder
    /// of `fmt`.
    ///
    /// `%%` emits a literal `%` without consuming the argument. If no
    /// directive remains, the tail is emitted verbatim and the argument is
    /// dropped. Most callers go through [`format`](Self::format); this is
    /// the building block for argument lists whose length is only known at
    /// runtime.
    pub fn format_step<'f, V: Renderable + ?Sized>(
        &mut self,
        mut fmt: &'f [u8],
        arg: &V,
    ) -> &'f [u8] {
        loop {
            let Some(pct) = fmt.iter().position(|&b| b == b'%') else {
                if !fmt.is_empty() {
                    self.write_run(fmt);
                }
                return &[];
            };
            if pct > 0 {
                self.write_run(&fmt[..pct]);
            }
            fmt = &fmt[pct + 1..];
            if fmt.first() == Some(&b'%') {
                self.write_run(b"%");
                fmt = &fmt[1..];
                continue;
            }
            // A pad the previous directive installed but never consumed is
            // flushed at full width before the new directive takes over.
            self.flush_stale_pad();
            match directive::parse_directive(fmt) {
                Ok((directive, consumed)) => {
                    fmt = &fmt[consumed..];
                    self.dispatch(&directive, arg);
                }
                Err(err) => {
                    fmt = &fmt[directive::skip_directive(fmt)..];
                    self.fail(err);
                }
            }
            return fmt;
        }
    }

    fn dispatch<V: Renderable + ?Sized>(&mut self, directive: &Directive, arg: &V) {
        if directive.requires_integer() && !arg.is_integer() {
            self.fail(FormatError::ExpectsInteger);
            return;
        }
        if let Some(width) = directive.width {
            self.pending = if directive.flags.left_justify {
                PendingPad::Right { width, fill: b' ' }
            } else if directive.flags.zero_fill {
                PendingPad::Left { width, fill: b'0' }
            } else {
                PendingPad::Left { width, fill: b' ' }
            };
        }
        arg.render_directive(self, directive);
    }

    // -----------------------------------------------------------------------
    // Padding controller
    // -----------------------------------------------------------------------

    /// The single choke point: apply any pending pad around `run`, then
    /// clear it. The deficit is `width - len(run)`, never negative.
    fn write_run(&mut self, run: &[u8]) {
        match mem::take(&mut self.pending) {
            PendingPad::None => self.transport.flush(run),
            PendingPad::Left { width, fill } => {
                self.emit_fill(width, run.len(), fill);
                self.transport.flush(run);
            }
            PendingPad::Right { width, fill } => {
                self.transport.flush(run);
                self.emit_fill(width, run.len(), fill);
            }
        }
    }

    fn emit_fill(&mut self, width: usize, run_len: usize, fill: u8) {
        for _ in run_len..width {
            self.transport.flush(&[fill]);
        }
    }

    fn flush_stale_pad(&mut self) {
        if self.pending != PendingPad::None {
            self.write_run(&[]);
        }
    }

    /// Strict checks abort through the panic facility with the reason;
    /// lenient checks drop the malformed directive.
    fn fail(&self, err: FormatError) {
        if self.checks.is_strict() {
            panic!("{err}");
        }
    }
}

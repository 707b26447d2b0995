//! The renderable capability and the variadic argument surface.
//!
//! Built-in types (integers, booleans, characters, pointers, strings) and
//! user-defined types participate in formatting through one trait. Dispatch
//! is resolved statically at the call site; the engine never learns an
//! argument's layout, only its rendering behavior.

use super::directive::Directive;
use super::stream::OutStream;
use super::transport::Transport;

/// Types that can write their own representation into an output stream.
///
/// User types implement [`render`](Self::render) only:
///
/// ```
/// use scrawl_core::fmt::{OutStream, Renderable, Transport};
///
/// struct Span { line: u32, col: u32 }
///
/// impl Renderable for Span {
///     fn render<T: Transport>(&self, out: &mut OutStream<T>) {
///         out.format("%d:%d", (self.line, self.col));
///     }
/// }
/// ```
///
/// The other two methods are engine-facing hooks with defaults: integer
/// built-ins override them to honor radix, sign, and grouping directives.
pub trait Renderable {
    /// Write the plain representation of `self` using the stream's
    /// primitive write operations.
    fn render<T: Transport>(&self, out: &mut OutStream<T>);

    /// True for integer-typed arguments; drives validation of the
    /// numeric-only flags and specifiers.
    fn is_integer(&self) -> bool {
        false
    }

    /// Render under a parsed directive. Non-integer types ignore the
    /// specifier and render plainly.
    fn render_directive<T: Transport>(&self, out: &mut OutStream<T>, directive: &Directive) {
        let _ = directive;
        self.render(out);
    }
}

impl<R: Renderable + ?Sized> Renderable for &R {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        (**self).render(out);
    }

    fn is_integer(&self) -> bool {
        (**self).is_integer()
    }

    fn render_directive<T: Transport>(&self, out: &mut OutStream<T>, directive: &Directive) {
        (**self).render_directive(out, directive);
    }
}

impl Renderable for str {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        out.write_str(self);
    }
}

impl Renderable for String {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        out.write_str(self);
    }
}

impl Renderable for bool {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        out.write_bool(*self);
    }
}

impl Renderable for char {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        out.write_char(*self);
    }
}

impl<P> Renderable for *const P {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        out.write_addr(*self as usize);
    }
}

impl<P> Renderable for *mut P {
    fn render<T: Transport>(&self, out: &mut OutStream<T>) {
        out.write_addr(*self as usize);
    }
}

macro_rules! impl_renderable_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Renderable for $ty {
            fn render<T: Transport>(&self, out: &mut OutStream<T>) {
                out.write_u64(*self as u64, 10, false, false);
            }

            fn is_integer(&self) -> bool {
                true
            }

            fn render_directive<T: Transport>(
                &self,
                out: &mut OutStream<T>,
                directive: &Directive,
            ) {
                let radix = directive.specifier.radix().unwrap_or(10);
                if radix == 10 && directive.flags.force_sign {
                    out.write_str("+");
                }
                out.write_u64(
                    *self as u64,
                    radix,
                    directive.specifier.lowercase(),
                    directive.flags.group_digits,
                );
            }
        }
    )*};
}

macro_rules! impl_renderable_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Renderable for $ty {
            fn render<T: Transport>(&self, out: &mut OutStream<T>) {
                out.write_i64(*self as i64, false, false);
            }

            fn is_integer(&self) -> bool {
                true
            }

            fn render_directive<T: Transport>(
                &self,
                out: &mut OutStream<T>,
                directive: &Directive,
            ) {
                match directive.specifier.radix() {
                    // `s` carries no radix and falls back to signed decimal.
                    Some(10) | None => out.write_i64(
                        *self as i64,
                        directive.flags.force_sign,
                        directive.flags.group_digits,
                    ),
                    // Non-decimal radices render the two's-complement bits.
                    Some(radix) => out.write_u64(
                        *self as i64 as u64,
                        radix,
                        directive.specifier.lowercase(),
                        false,
                    ),
                }
            }
        }
    )*};
}

impl_renderable_unsigned!(u8, u16, u32, u64, usize);
impl_renderable_signed!(i8, i16, i32, i64, isize);

/// A heterogeneous argument list, consumed one directive per element.
///
/// Implemented for tuples of [`Renderable`] values up to arity 8. Each step
/// hands one argument to [`OutStream::format_step`] and recurses on the
/// tail — the static-recursion realization of variadic formatting.
pub trait FormatArgs {
    fn format_into<T: Transport>(self, fmt: &[u8], out: &mut OutStream<T>);
}

impl FormatArgs for () {
    /// With no arguments left the tail is emitted verbatim, except that
    /// `%%` still collapses to a literal `%`.
    fn format_into<T: Transport>(self, mut fmt: &[u8], out: &mut OutStream<T>) {
        loop {
            match fmt.windows(2).position(|pair| pair == b"%%") {
                Some(idx) => {
                    out.write_bytes(&fmt[..idx + 1]);
                    fmt = &fmt[idx + 2..];
                }
                None => {
                    if !fmt.is_empty() {
                        out.write_bytes(fmt);
                    }
                    return;
                }
            }
        }
    }
}

macro_rules! impl_format_args {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: Renderable $(, $tail: Renderable)*> FormatArgs for ($head, $($tail,)*) {
            #[allow(non_snake_case)]
            fn format_into<T: Transport>(self, fmt: &[u8], out: &mut OutStream<T>) {
                let ($head, $($tail,)*) = self;
                let rest = out.format_step(fmt, &$head);
                ($($tail,)*).format_into(rest, out);
            }
        }
        impl_format_args!($($tail),*);
    };
}

impl_format_args!(A, B, C, D, E, F, G, H);

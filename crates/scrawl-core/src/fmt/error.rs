//! Format error taxonomy.
//!
//! Every condition is detected synchronously while parsing or rendering a
//! single directive. There is no recoverable path inside the engine: under
//! strict checks the error's message becomes the abort reason, under lenient
//! checks the directive is dropped.

use thiserror::Error;

/// A malformed directive or renderer precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The same flag appeared twice in one directive.
    #[error("duplicate format flag `{0}`")]
    DuplicateFlag(char),
    /// `-` and `0` demand contradictory justification and fill.
    #[error("incompatible format flags `-` and `0`")]
    IncompatibleFlags,
    /// `-` has nothing to pad against without an explicit width.
    #[error("missing format width with `-` flag")]
    MissingWidth,
    /// The mandatory type specifier is absent or unknown.
    #[error("invalid format, expected type specifier")]
    ExpectedSpecifier,
    /// `+` or `,` combined with a non-decimal radix.
    #[error("format flag `{0}` expects decimal formatting")]
    NonDecimalFlag(char),
    /// A numeric-only flag or integer specifier met a non-integer argument.
    #[error("formatting expects integer argument")]
    ExpectsInteger,
    /// Radix handed directly to the renderer outside the supported range.
    #[error("invalid radix {0}, expected 2..=36")]
    InvalidRadix(u32),
}

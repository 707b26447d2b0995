//! Integer digit rendering.
//!
//! Converts 64-bit magnitudes into digit characters under an arbitrary radix
//! in [2, 36]. Digits are built back-to-front into a fixed scratch region
//! sized to the worst case: 64 binary digits (decimal with grouping peaks at
//! 20 digits plus 6 separators).

/// Smallest radix the renderer accepts.
pub const MIN_RADIX: u32 = 2;
/// Largest radix the renderer accepts.
pub const MAX_RADIX: u32 = 36;

/// Scratch capacity for one rendered magnitude.
pub(crate) const SCRATCH_LEN: usize = 64;

const DIGIT_SET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Render `value` right-aligned into the end of `scratch` and return the
/// number of bytes produced (digits plus any grouping separators).
///
/// `0` always renders as the single byte `b'0'`. Grouping inserts a `,`
/// every three digits, never before the most significant one; callers only
/// request it for radix 10. The caller guarantees `radix` is in range.
pub(crate) fn render_digits(
    mut value: u64,
    radix: u32,
    lowercase: bool,
    separators: bool,
    scratch: &mut [u8; SCRATCH_LEN],
) -> usize {
    debug_assert!((MIN_RADIX..=MAX_RADIX).contains(&radix));
    if value == 0 {
        scratch[SCRATCH_LEN - 1] = b'0';
        return 1;
    }
    let radix = u64::from(radix);
    let mut pos = SCRATCH_LEN;
    let mut emitted = 0usize;
    while value > 0 {
        let digit = DIGIT_SET[(value % radix) as usize];
        let digit = if lowercase && digit > b'9' {
            digit + 32
        } else {
            digit
        };
        pos -= 1;
        scratch[pos] = digit;
        value /= radix;
        emitted += 1;
        if separators && value > 0 && emitted % 3 == 0 {
            pos -= 1;
            scratch[pos] = b',';
        }
    }
    SCRATCH_LEN - pos
}

// Pattern: Integer <-> ASCII conversion in bases 2 through 16
// Strings are null-terminated byte sequences; lengths include the terminator.

use heapless::Vec as HeaplessVec;

use crate::error::{ExerciseError, Result};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base.
pub const MAX_BASE: u32 = 16;
/// Longest possible output: sign, 32 binary digits and the terminator.
pub const MAX_ASCII_LEN: usize = 34;

/// Fixed-capacity, null-terminated conversion result.
pub type AsciiBuf = HeaplessVec<u8, MAX_ASCII_LEN>;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ExerciseError::InvalidBase(base))
    }
}

/// Value of an ASCII digit character, accepting upper and lower case hex.
fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'F' => Some(u32::from(c - b'A') + 10),
        b'a'..=b'f' => Some(u32::from(c - b'a') + 10),
        _ => None,
    }
}

/// Number of digits `magnitude` needs in `base`; zero still needs one.
fn digit_count(mut magnitude: u32, base: u32) -> usize {
    let mut count = 1;
    while magnitude >= base {
        magnitude /= base;
        count += 1;
    }
    count
}

// ============================================================================
// Milestone 1: Integer to ASCII
// ============================================================================

/// Write `value` into `dest` as a null-terminated string in `base`.
///
/// Digits are produced least-significant first and then reversed in place;
/// the `-` sign (for negative values) and the terminator are not part of
/// the reversed span. Returns the total length including sign and terminator.
///
/// Nothing is written when `dest` is too small.
pub fn to_ascii(value: i32, dest: &mut [u8], base: u32) -> Result<usize> {
    check_base(base)?;

    let negative = value < 0;
    // unsigned_abs keeps i32::MIN representable
    let mut magnitude = value.unsigned_abs();
    let sign_len = usize::from(negative);
    let needed = sign_len + digit_count(magnitude, base) + 1;
    if dest.len() < needed {
        return Err(ExerciseError::BufferTooSmall {
            needed,
            available: dest.len(),
        });
    }

    let mut len = 0;
    if negative {
        dest[len] = b'-';
        len += 1;
    }

    let start = len;
    loop {
        dest[len] = DIGITS[(magnitude % base) as usize];
        magnitude /= base;
        len += 1;
        if magnitude == 0 {
            break;
        }
    }
    let end = len;

    dest[len] = 0;
    len += 1;

    dest[start..end].reverse();
    Ok(len)
}

/// Convert `value` into a fixed-capacity buffer holding the null-terminated text.
pub fn format_radix(value: i32, base: u32) -> Result<AsciiBuf> {
    let mut scratch = [0u8; MAX_ASCII_LEN];
    let len = to_ascii(value, &mut scratch, base)?;

    let mut out = AsciiBuf::new();
    // MAX_ASCII_LEN bounds every conversion, so this cannot overflow.
    out.extend_from_slice(&scratch[..len])
        .map_err(|_| ExerciseError::BufferTooSmall {
            needed: len,
            available: MAX_ASCII_LEN,
        })?;
    Ok(out)
}

// ============================================================================
// Milestone 2: ASCII to integer
// ============================================================================

/// Parse a signed integer in `base` from `src`.
///
/// An optional leading `-` is consumed first. At most `max_digits` digit
/// characters are then accumulated; parsing also stops at a null byte, at the
/// end of `src`, or at any character that is not a digit of `base`.
/// Accumulation wraps on overflow, so the caller is responsible for keeping
/// the value inside the `i32` range.
pub fn from_ascii(src: &[u8], max_digits: usize, base: u32) -> Result<i32> {
    check_base(base)?;

    let (negative, digits) = match src.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, src),
    };

    let mut result: i32 = 0;
    for &c in digits.iter().take(max_digits) {
        let Some(value) = digit_value(c).filter(|&v| v < base) else {
            break;
        };
        result = result
            .wrapping_mul(base as i32)
            .wrapping_add(value as i32);
    }

    Ok(if negative { result.wrapping_neg() } else { result })
}

// ============================================================================
// Tests
// ============================================================================

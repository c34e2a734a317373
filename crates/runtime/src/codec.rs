//! Integer <-> text conversion in radix 2..=16.
//!
//! Encoding writes into a caller-owned buffer from the back, so the text
//! usually starts somewhere in the middle of it. Decoding treats a NUL
//! byte as the end of input, matching C strings handed over from newlib
//! programs.
use types::{CONVERSION_BUFFER_LEN, DIGITS, FatalError, Radix};

/// Conversion scratch space. 64 binary digits, a sign and a NUL.
pub type ConversionBuffer = [u8; CONVERSION_BUFFER_LEN];

/// Renders `n` and returns the text, which lives inside `buf`.
///
/// `buf[CONVERSION_BUFFER_LEN - 1]` is always set to NUL, so the returned
/// slice is also a valid C string when read through its pointer.
pub fn integer_to_text(n: i64, radix: Radix, buf: &mut ConversionBuffer) -> &str {
    // branch-free |n|, exact for i64::MIN
    let mask = n >> 63;
    let magnitude = (n ^ mask).wrapping_sub(mask) as u64;

    let mut start = write_digits(magnitude, radix, buf);
    if n < 0 {
        start -= 1;
        buf[start] = b'-';
    }
    as_text(buf, start)
}

/// Unsigned counterpart of [`integer_to_text`] over the full `u64` range.
pub fn unsigned_to_text(n: u64, radix: Radix, buf: &mut ConversionBuffer) -> &str {
    let start = write_digits(n, radix, buf);
    as_text(buf, start)
}

/// Parses an optionally negative integer.
///
/// Accumulation wraps at 64 bits, which is what lets `"-9223372036854775808"`
/// come back as `i64::MIN`. Out-of-range text is not rejected:
/// `"9223372036854775808"` also decodes to `i64::MIN`.
pub fn text_to_integer(text: impl AsRef<[u8]>, radix: Radix) -> Result<i64, FatalError> {
    let text = until_nul(text.as_ref());
    let (negative, digits, offset) = match text.split_first() {
        Some((b'-', rest)) => (true, rest, 1),
        _ => (false, text, 0),
    };

    let magnitude = accumulate(digits, radix, offset)?;
    Ok(if negative {
        0u64.wrapping_sub(magnitude) as i64
    } else {
        magnitude as i64
    })
}

/// Parses an unsigned integer. A sign is not a digit here. Values past
/// `u64::MAX` wrap, so `"18446744073709551616"` decodes to 0.
pub fn text_to_unsigned(text: impl AsRef<[u8]>, radix: Radix) -> Result<u64, FatalError> {
    accumulate(until_nul(text.as_ref()), radix, 0)
}

/// Fills `buf` back to front and returns the index of the first digit.
fn write_digits(mut quotient: u64, radix: Radix, buf: &mut ConversionBuffer) -> usize {
    let base = radix.get() as u64;
    let mut pos = CONVERSION_BUFFER_LEN - 1;
    buf[pos] = 0;
    pos -= 1;

    while quotient >= base {
        buf[pos] = DIGITS[(quotient % base) as usize];
        quotient /= base;
        pos -= 1;
    }
    buf[pos] = DIGITS[quotient as usize];
    pos
}

fn accumulate(digits: &[u8], radix: Radix, offset: usize) -> Result<u64, FatalError> {
    if digits.is_empty() {
        return Err(FatalError::InvalidDigit {
            position: offset,
            found: None,
        });
    }

    let base = radix.get() as u64;
    digits.iter().enumerate().try_fold(0u64, |acc, (idx, &byte)| {
        let digit = radix
            .digit_value(byte)
            .ok_or(FatalError::InvalidDigit {
                position: offset + idx,
                found: Some(byte),
            })?;
        Ok(acc.wrapping_mul(base).wrapping_add(digit as u64))
    })
}

fn until_nul(text: &[u8]) -> &[u8] {
    match text.iter().position(|&b| b == 0) {
        Some(end) => &text[..end],
        None => text,
    }
}

fn as_text(buf: &ConversionBuffer, start: usize) -> &str {
    let bytes = &buf[start..CONVERSION_BUFFER_LEN - 1];
    // SAFETY: every byte in the range came from DIGITS or is b'-'.
    unsafe { core::str::from_utf8_unchecked(bytes) }
}

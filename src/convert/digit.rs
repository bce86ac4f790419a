//! Digit/character mapping for the 36-symbol alphabet

use super::error::ConvertError;

/// Number of decimal digit symbols before the alphabet switches to letters.
const LETTER_START: u32 = 10;

/// Largest value representable by a single digit (`'z'`).
const MAX_DIGIT: u32 = 35;

/// Return the numeric value of a digit character in the given base.
///
/// Accepts `'0'-'9'` and `'a'-'z'`; uppercase letters are folded to lowercase
/// first, so `digit_value('A', 16)` is `Ok(10)`.
///
/// # Errors
/// Returns [`ConvertError::InvalidDigit`] for characters outside the
/// alphabet, [`ConvertError::InvalidBase`] when `base < 2`, and
/// [`ConvertError::DigitOutOfRange`] when the digit's value is not below
/// `base`.
pub fn digit_value(ch: char, base: u32) -> Result<u32, ConvertError> {
    let ch = ch.to_ascii_lowercase();
    if !ch.is_ascii_alphanumeric() {
        return Err(ConvertError::InvalidDigit { ch });
    }
    if base < super::MIN_BASE {
        return Err(ConvertError::InvalidBase { base });
    }

    let value = if ch.is_ascii_digit() {
        ch as u32 - '0' as u32
    } else {
        ch as u32 - 'a' as u32 + LETTER_START
    };

    if value >= base {
        return Err(ConvertError::DigitOutOfRange { ch, base });
    }

    Ok(value)
}

/// Return the canonical (lowercase) digit character for a value in `[0, 35]`.
///
/// # Errors
/// Returns [`ConvertError::NoDigitFor`] when `value > 35`.
pub fn digit_char(value: u32) -> Result<char, ConvertError> {
    if value > MAX_DIGIT {
        return Err(ConvertError::NoDigitFor { value });
    }

    let ch = if value < LETTER_START {
        (b'0' + value as u8) as char
    } else {
        (b'a' + (value - LETTER_START) as u8) as char
    };

    Ok(ch)
}

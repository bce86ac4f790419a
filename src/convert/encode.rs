//! Re-encoding the decimal intermediate into a target base

use super::digit::digit_char;
use super::error::ConvertError;

/// Maximum number of digits emitted after the separator.
const ROUND_SIGNS: i32 = 10;

/// Correction added before flooring when rounding the fractional remainder.
///
/// Absorbs floating-point drift so fractions that should terminate (for
/// example exact decimal fractions) do not spuriously run to the full
/// `ROUND_SIGNS` digits.
const CORRECTION: f64 = 0.003;

/// Encode a non-negative integer into its digit string in `base`.
///
/// Digits are produced least significant first by repeated division and
/// reversed at the end. A value of 0 encodes as `"0"` rather than the empty
/// string the bare loop would produce.
pub fn encode_integer(value: u32, base: u32) -> Result<String, ConvertError> {
    if value == 0 {
        return Ok("0".to_string());
    }

    let mut value = value;
    let mut digits = Vec::new();
    while value != 0 {
        digits.push(digit_char(value % base)?);
        value /= base;
    }
    digits.reverse();

    Ok(digits.into_iter().collect())
}

/// Encode a fractional value in `[0, 1)` into at most 10 digits in `base`.
///
/// Each step peels off the most significant remaining digit with
/// `floor(value * base)` and keeps the remainder. The loop stops early once
/// the rounded remainder reaches 0; since the body always runs at least
/// once, a zero fraction encodes as `"0"`.
pub fn encode_fractional(value: f64, base: u32) -> Result<String, ConvertError> {
    let mut value = value;
    let mut digits = String::new();

    for _ in 0..ROUND_SIGNS {
        let scaled = value * f64::from(base);
        digits.push(digit_char(scaled as u32)?);
        value = scaled.fract();
        if round_remainder(value) == 0.0 {
            break;
        }
    }

    Ok(digits)
}

/// Round a fractional remainder to `ROUND_SIGNS` digits, nudged upward by
/// `CORRECTION` so values a hair below a digit boundary floor cleanly.
fn round_remainder(value: f64) -> f64 {
    let scale = 10f64.powi(ROUND_SIGNS);
    (value * scale + CORRECTION).floor() / scale
}

//! Decoding a digit string into the decimal intermediate

use super::digit::digit_value;
use super::error::ConvertError;

/// Decimal intermediate used as the pivot for every base-to-base conversion.
///
/// The integer part is bounded by `u32`; inputs whose integer part does not
/// fit are outside the contract. The fractional part is always in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalValue {
    /// Integer part of the number
    pub integer: u32,
    /// Fractional part of the number, in `[0, 1)`
    pub fraction: f64,
}

/// Parse the integer part of a number written in `base`, most significant
/// digit first.
///
/// An empty string parses to 0, so inputs like `".5"` have a well-defined
/// integer part.
pub fn parse_integer_part(text: &str, base: u32) -> Result<u32, ConvertError> {
    let mut result: u32 = 0;
    for ch in text.chars() {
        result = result.wrapping_mul(base).wrapping_add(digit_value(ch, base)?);
    }
    Ok(result)
}

/// Parse the fractional part of a number written in `base`.
///
/// `text` holds the digits after the separator, most significant first;
/// digit `i` contributes `digit_value * base^-(i+1)`.
pub fn parse_fractional_part(text: &str, base: u32) -> Result<f64, ConvertError> {
    let mut result = 0.0;
    for (i, ch) in text.chars().enumerate() {
        result += f64::from(digit_value(ch, base)?) * f64::from(base).powi(-(i as i32 + 1));
    }
    Ok(result)
}

/// Convert a number text in `base` into its [`DecimalValue`].
///
/// Splits on the first `,` if one is present, otherwise on the first `.`;
/// with no separator the fractional part is taken as `"0"`.
///
/// # Errors
/// Returns [`ConvertError::InvalidBase`] when `base < 2`, or a digit error
/// when either part contains a character invalid in `base`.
pub fn to_decimal(text: &str, base: u32) -> Result<DecimalValue, ConvertError> {
    if base < super::MIN_BASE {
        return Err(ConvertError::InvalidBase { base });
    }

    let (integer_text, fraction_text) = split_on_separator(text);

    Ok(DecimalValue {
        integer: parse_integer_part(integer_text, base)?,
        fraction: parse_fractional_part(fraction_text, base)?,
    })
}

/// Split a number text into integer and fractional digit strings.
///
/// Both `,` and `.` are accepted as equivalent decimal markers, with `,`
/// taking precedence when both appear.
fn split_on_separator(text: &str) -> (&str, &str) {
    let separator = if text.contains(',') { ',' } else { '.' };
    match text.split_once(separator) {
        Some((integer, fraction)) => (integer, fraction),
        None => (text, "0"),
    }
}

//! Conversion module - the base-conversion pipeline
//!
//! Pure functions only: digit/character mapping, decoding a digit string into
//! a decimal intermediate, and re-encoding that intermediate into a target
//! base. No I/O and no shared state; every operation is a one-shot
//! transformation that either produces a value or fails with a
//! [`ConvertError`] before producing any output.

pub mod decimal;
pub mod digit;
pub mod encode;
pub mod error;

pub use decimal::*;
pub use digit::*;
pub use encode::*;
pub use error::ConvertError;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base (digits `0-9` plus letters `a-z`).
pub const MAX_BASE: u32 = 36;

/// Convert `text`, a number written in `start_base`, into its representation
/// in `end_base`, pivoting through a decimal intermediate.
///
/// The integer and fractional parts are converted independently and joined
/// with a literal `.`, so the result always contains exactly one `.` even for
/// whole numbers (`translate(10, "255", 16)` is `"ff.0"`). Input may use
/// either `.` or `,` as the separator.
///
/// # Errors
/// Returns [`ConvertError::InvalidBase`] when either base is outside
/// `[2, 36]`, or a digit error when `text` contains a character that is not
/// valid in `start_base`.
pub fn translate(start_base: u32, text: &str, end_base: u32) -> Result<String, ConvertError> {
    for base in [start_base, end_base] {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(ConvertError::InvalidBase { base });
        }
    }

    let decimal = to_decimal(text, start_base)?;
    let integer = encode_integer(decimal.integer, end_base)?;
    let fraction = encode_fractional(decimal.fraction, end_base)?;

    Ok(format!("{integer}.{fraction}"))
}

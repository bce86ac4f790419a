//! Error types for base conversion.
//!
//! This module defines the `ConvertError` enum covering every failure mode of
//! the conversion pipeline: bases outside the supported range and characters
//! or values that have no digit representation. Errors carry the offending
//! input so messages can point at exactly what was wrong.

use thiserror::Error;

/// Errors that can occur while converting a number between bases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Base outside the supported range `[2, 36]`.
    #[error("invalid base {base}: a base must be between 2 and 36")]
    InvalidBase {
        /// The rejected base
        base: u32,
    },

    /// Character outside the 36-symbol alphabet (`0-9`, `a-z`).
    #[error("invalid digit '{ch}': expected '0'-'9' or 'a'-'z'")]
    InvalidDigit {
        /// The rejected character
        ch: char,
    },

    /// Digit exists in the alphabet but its value is too large for the base.
    ///
    /// For example `'g'` (value 16) is not a valid digit in base 16.
    #[error("digit '{ch}' cannot be used in a base-{base} number")]
    DigitOutOfRange {
        /// The rejected character
        ch: char,
        /// The base the digit was checked against
        base: u32,
    },

    /// Numeric value with no single-character representation.
    ///
    /// Digit values must be in `[0, 35]` to map onto the 36-symbol alphabet.
    #[error("value {value} has no digit representation (must be 0-35)")]
    NoDigitFor {
        /// The unrepresentable value
        value: u32,
    },
}

//! Radix: Positional Base Conversion Library
//!
//! A library for converting real numbers (integer plus fractional part)
//! between positional numeral systems with bases 2 through 36.

pub mod cli;
pub mod convert;
pub mod utils;

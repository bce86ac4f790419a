//! Command-line argument definitions using clap

use clap::Parser;

/// Radix - Convert numbers between positional numeral systems (bases 2-36)
#[derive(Parser, Debug)]
#[command(name = "radix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base the input number is written in (2-36)
    pub start_base: Option<u32>,

    /// Number to convert. May carry a fractional part separated by '.' or ','
    /// (e.g. "1010.1"); digits beyond 9 are letters 'a'-'z', case-insensitive.
    pub number: Option<String>,

    /// Base to convert the number to (2-36)
    pub end_base: Option<u32>,

    /// Anything past the third argument. Captured instead of rejected so any
    /// argument count other than exactly three enters the interactive loop.
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Return the one-shot conversion request when exactly three arguments
    /// were given; any other argument count falls back to the interactive
    /// loop.
    pub fn one_shot(&self) -> Option<(u32, &str, u32)> {
        if !self.extra.is_empty() {
            return None;
        }
        match (self.start_base, self.number.as_deref(), self.end_base) {
            (Some(start), Some(number), Some(end)) => Some((start, number, end)),
            _ => None,
        }
    }
}

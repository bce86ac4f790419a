//! Interactive prompts using dialoguer
//!
//! Numeric prompts re-prompt indefinitely on input that does not parse
//! (dialoguer shows a red validation error and discards the bad line), so a
//! mistyped base never leaks into a later free-text answer.

use anyhow::Result;
use dialoguer::Input;

/// Prompt for the number to convert. Any string is accepted; digit
/// validation happens in the converter.
pub fn prompt_number(message: &str) -> Result<String> {
    let number: String = Input::new()
        .with_prompt(message)
        .allow_empty(false)
        .interact_text()?;
    Ok(number)
}

/// Prompt for a base, retrying until the input parses as a `u32`.
///
/// Range validation stays with the converter, so an in-range integer like
/// 40 is accepted here and rejected there with the typed value in the
/// error message.
pub fn prompt_base(message: &str) -> Result<u32> {
    let value: u32 = Input::new().with_prompt(message).interact_text()?;
    Ok(value)
}

/// Prompt for an integer, retrying until the input parses.
pub fn prompt_int(message: &str) -> Result<i64> {
    let value: i64 = Input::new().with_prompt(message).interact_text()?;
    Ok(value)
}

/// Ask whether to run another conversion; `1` continues, anything else stops.
pub fn prompt_continue() -> Result<bool> {
    Ok(prompt_int("Continue? (1/0)")? == 1)
}

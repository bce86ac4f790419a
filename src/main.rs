//! Radix: Base Conversion CLI Tool
//!
//! Converts a real number between positional numeral systems with bases
//! 2 through 36. With exactly three arguments it performs a single
//! conversion; otherwise it runs an interactive prompt loop.

use anyhow::Result;
use clap::Parser;

use radix::cli::{prompt_base, prompt_continue, prompt_number, Cli};
use radix::convert::translate;
use radix::utils::{print_banner, print_error, print_result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // One-shot mode: exactly three arguments, one conversion, plain output.
    if let Some((start_base, number, end_base)) = cli.one_shot() {
        match translate(start_base, number, end_base) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                // Conversion errors go to stdout, not stderr.
                println!("{e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    run_interactive()
}

/// Prompt loop: number, start base, end base, result, continue?
///
/// A conversion error only abandons the current iteration; the loop still
/// reaches the continue prompt so one bad input does not end the session.
fn run_interactive() -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    loop {
        let number = prompt_number("Please enter a number")?;
        let start_base = prompt_base("Please enter the base the number is written in")?;
        let end_base = prompt_base("Please enter the base to convert the number to")?;

        match translate(start_base, &number, end_base) {
            Ok(result) => print_result(&result),
            Err(e) => print_error(&e.to_string()),
        }

        if !prompt_continue()? {
            break;
        }
    }

    Ok(())
}

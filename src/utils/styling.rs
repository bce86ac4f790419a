//! Terminal styling utilities for prompt-loop output

use console::style;

/// Print the application banner shown when entering the interactive loop.
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("radix").cyan().bold(),
        style(format!("v{version}")).dim()
    );
    println!(
        "    {}",
        style("Convert numbers between bases 2-36").dim()
    );
    println!("    {}", style("─".repeat(40)).dim());
}

/// Print a conversion result.
pub fn print_result(result: &str) {
    println!("{} {}", style("=").green().bold(), style(result).bold());
}

/// Print an error message to stdout.
///
/// Conversion failures go to stdout rather than stderr so they appear in
/// sequence with the prompts that produced them.
pub fn print_error(message: &str) {
    println!("{}", style(message).red());
}

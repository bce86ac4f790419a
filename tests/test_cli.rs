//! Tests for CLI argument parsing and one-shot invocation

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use radix::cli::Cli;

#[test]
fn test_cli_three_args_is_one_shot() {
    let cli = Cli::parse_from(["radix", "10", "255", "16"]);
    assert_eq!(
        cli.one_shot(),
        Some((10, "255", 16)),
        "three arguments should select one-shot mode"
    );
}

#[test]
fn test_cli_fewer_args_falls_back_to_interactive() {
    let cli = Cli::parse_from(["radix"]);
    assert!(cli.one_shot().is_none(), "no arguments should select interactive mode");

    let cli = Cli::parse_from(["radix", "10", "255"]);
    assert!(cli.one_shot().is_none(), "two arguments should select interactive mode");
}

#[test]
fn test_cli_extra_args_fall_back_to_interactive() {
    let cli = Cli::parse_from(["radix", "10", "255", "16", "2"]);
    assert!(
        cli.one_shot().is_none(),
        "more than three arguments should select interactive mode"
    );
}

#[test]
fn test_four_args_are_not_a_usage_error() {
    // A fourth argument must route to the interactive loop (which then fails
    // on the closed stdin), not trip clap's unexpected-argument error.
    Command::cargo_bin("radix")
        .unwrap()
        .args(["10", "255", "16", "2"])
        .write_stdin("")
        .assert()
        .stdout(predicate::str::contains("Convert numbers between bases"))
        .stderr(predicate::str::contains("unexpected argument").not());
}

#[test]
fn test_one_shot_prints_result_to_stdout() {
    Command::cargo_bin("radix")
        .unwrap()
        .args(["10", "255", "16"])
        .assert()
        .success()
        .stdout("ff.0\n");
}

#[test]
fn test_one_shot_fractional_conversion() {
    Command::cargo_bin("radix")
        .unwrap()
        .args(["2", "1010.1", "10"])
        .assert()
        .success()
        .stdout("10.5\n");
}

#[test]
fn test_one_shot_invalid_base_error_goes_to_stdout() {
    Command::cargo_bin("radix")
        .unwrap()
        .args(["1", "5", "10"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid base 1"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_one_shot_invalid_digit_error_goes_to_stdout() {
    Command::cargo_bin("radix")
        .unwrap()
        .args(["16", "fg", "16"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("digit 'g'"))
        .stderr(predicate::str::is_empty());
}

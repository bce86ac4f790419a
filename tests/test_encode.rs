//! Unit tests for encoding the decimal intermediate into a target base

use radix::convert::{encode_fractional, encode_integer};

#[test]
fn test_encode_integer_basic() {
    assert_eq!(encode_integer(255, 16).unwrap(), "ff");
    assert_eq!(encode_integer(10, 2).unwrap(), "1010");
    assert_eq!(encode_integer(255, 10).unwrap(), "255");
    assert_eq!(encode_integer(35, 36).unwrap(), "z");
    assert_eq!(encode_integer(36, 36).unwrap(), "10");
}

#[test]
fn test_encode_integer_zero_is_zero_digit() {
    // The bare div/mod loop would produce ""; zero must encode as "0".
    for base in [2, 10, 16, 36] {
        assert_eq!(
            encode_integer(0, base).unwrap(),
            "0",
            "zero should encode as \"0\" in base {}",
            base
        );
    }
}

#[test]
fn test_encode_fractional_zero_is_zero_digit() {
    // The loop body runs at least once, so a zero fraction yields "0".
    assert_eq!(encode_fractional(0.0, 10).unwrap(), "0");
    assert_eq!(encode_fractional(0.0, 2).unwrap(), "0");
}

#[test]
fn test_encode_fractional_terminating() {
    assert_eq!(encode_fractional(0.5, 10).unwrap(), "5");
    assert_eq!(encode_fractional(0.5, 2).unwrap(), "1");
    assert_eq!(encode_fractional(0.25, 2).unwrap(), "01");
    assert_eq!(encode_fractional(0.5, 16).unwrap(), "8");
}

#[test]
fn test_encode_fractional_exact_decimal_terminates_early() {
    // 0.1 is not exactly representable in binary floating point; the
    // correction constant must still let it terminate in base 10.
    let encoded = encode_fractional(0.1, 10).unwrap();
    assert_eq!(encoded, "1", "0.1 in base 10 should terminate as \"1\"");
}

#[test]
fn test_encode_fractional_caps_at_ten_digits() {
    // 1/3 never terminates; output is truncated at ten digits.
    let encoded = encode_fractional(1.0 / 3.0, 10).unwrap();
    assert_eq!(encoded.len(), 10);
    assert!(encoded.chars().all(|c| c == '3'));
}

#[test]
fn test_encode_fractional_repeating_binary() {
    // 0.1 (decimal) in binary repeats 0.000110011...
    let encoded = encode_fractional(0.1, 2).unwrap();
    assert_eq!(encoded.len(), 10);
    assert!(encoded.starts_with("0001100110"));
}

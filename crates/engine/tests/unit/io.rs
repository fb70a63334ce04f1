//! # Byte Input Tests
//!
//! Tests for `TokenReader` and the numeric input parsers.

use std::io::Cursor;

use rtl_core::core::io::{parse_binary, parse_decimal, parse_hex, Input, TokenReader};

fn reader(input: &str) -> TokenReader<Cursor<Vec<u8>>> {
    TokenReader::new(Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn test_read_char_returns_every_byte() {
    let mut input = reader("a b");
    assert_eq!(input.read_char(), Some(b'a'));
    assert_eq!(input.read_char(), Some(b' '));
    assert_eq!(input.read_char(), Some(b'b'));
    assert_eq!(input.read_char(), None);
}

#[test]
fn test_read_token_skips_leading_whitespace() {
    let mut input = reader("  \n\t42");
    assert_eq!(input.read_token().as_deref(), Some("42"));
    assert_eq!(input.read_token(), None);
}

#[test]
fn test_read_token_keeps_terminator_for_read_char() {
    let mut input = reader("42 X");
    assert_eq!(input.read_token().as_deref(), Some("42"));
    // The space that ended the token is still pending.
    assert_eq!(input.read_char(), Some(b' '));
    assert_eq!(input.read_char(), Some(b'X'));
}

#[test]
fn test_read_token_sequence() {
    let mut input = reader("1010 ff 300");
    assert_eq!(input.read_token().as_deref(), Some("1010"));
    assert_eq!(input.read_token().as_deref(), Some("ff"));
    assert_eq!(input.read_token().as_deref(), Some("300"));
    assert_eq!(input.read_token(), None);
}

#[test]
fn test_parse_binary_keeps_last_eight_bits() {
    assert_eq!(parse_binary("101"), Some(5));
    assert_eq!(parse_binary("11111111"), Some(255));
    assert_eq!(parse_binary("111111111"), Some(255));
    assert_eq!(parse_binary("100000001"), Some(1));
}

#[test]
fn test_parse_binary_rejects_other_digits() {
    assert_eq!(parse_binary("102"), None);
    assert_eq!(parse_binary("abc"), None);
    assert_eq!(parse_binary(""), None);
}

#[test]
fn test_parse_decimal_wraps_modulo_256() {
    assert_eq!(parse_decimal("0"), Some(0));
    assert_eq!(parse_decimal("255"), Some(255));
    assert_eq!(parse_decimal("300"), Some(44));
    assert_eq!(parse_decimal("256"), Some(0));
}

#[test]
fn test_parse_decimal_rejects_malformed() {
    assert_eq!(parse_decimal("12a"), None);
    assert_eq!(parse_decimal("-1"), None);
    assert_eq!(parse_decimal("99999999999999999999999"), None);
}

#[test]
fn test_parse_hex_keeps_last_two_digits() {
    assert_eq!(parse_hex("ff"), Some(0xFF));
    assert_eq!(parse_hex("FF"), Some(0xFF));
    assert_eq!(parse_hex("1FF"), Some(0xFF));
    assert_eq!(parse_hex("a"), Some(0xA));
}

#[test]
fn test_parse_hex_rejects_malformed() {
    assert_eq!(parse_hex("g1"), None);
    assert_eq!(parse_hex(""), None);
    assert_eq!(parse_hex("0x1f"), None);
}

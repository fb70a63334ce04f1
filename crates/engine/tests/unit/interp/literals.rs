//! # Literal and Token Fault Tests
//!
//! Tests for `set`-family literal interpretation and unmapped-token faults.

use rtl_core::Fault;

use crate::common::TestRun;

#[test]
fn test_set_char_takes_first_character() {
    let mut run = TestRun::new("setc A");
    run.run().unwrap();
    assert_eq!(run.cell(), b'A');

    let mut run = TestRun::new("setc AB");
    run.run().unwrap();
    assert_eq!(run.cell(), b'A');
}

#[test]
fn test_set_decimal_in_range() {
    let mut run = TestRun::new("setd 200");
    run.run().unwrap();
    assert_eq!(run.cell(), 200);
}

#[test]
fn test_set_hex_in_range() {
    let mut run = TestRun::new("setx FF");
    run.run().unwrap();
    assert_eq!(run.cell(), 255);

    let mut run = TestRun::new("setx 0a");
    run.run().unwrap();
    assert_eq!(run.cell(), 10);
}

#[test]
fn test_register_set_family() {
    let mut run = TestRun::new("gsetc Z");
    run.run().unwrap();
    assert_eq!(run.register(), b'Z');

    let mut run = TestRun::new("gsetd 7");
    run.run().unwrap();
    assert_eq!(run.register(), 7);

    let mut run = TestRun::new("gsetx 1f");
    run.run().unwrap();
    assert_eq!(run.register(), 0x1F);
}

#[test]
fn test_decimal_out_of_range_faults() {
    let mut run = TestRun::new("setd 300");
    assert_eq!(
        run.run(),
        Err(Fault::LiteralOutOfRange {
            pc: 0,
            token: "300".to_owned()
        })
    );
}

#[test]
fn test_negative_decimal_faults() {
    let mut run = TestRun::new("gsetd -1");
    assert!(matches!(run.run(), Err(Fault::LiteralOutOfRange { pc: 0, .. })));
}

#[test]
fn test_hex_out_of_range_faults() {
    let mut run = TestRun::new("setx 100");
    assert!(matches!(run.run(), Err(Fault::LiteralOutOfRange { pc: 0, .. })));
}

#[test]
fn test_unparseable_decimal_faults() {
    let mut run = TestRun::new("setd five");
    assert!(matches!(run.run(), Err(Fault::LiteralOutOfRange { pc: 0, .. })));
}

#[test]
fn test_missing_literal_faults() {
    let mut run = TestRun::new("g++ setd");
    assert_eq!(
        run.run(),
        Err(Fault::MissingLiteral {
            pc: 1,
            token: "setd".to_owned()
        })
    );
}

#[test]
fn test_unknown_token_names_token_and_counter() {
    let mut run = TestRun::new("g++ frobnicate");
    assert_eq!(
        run.run(),
        Err(Fault::UnknownInstruction {
            pc: 1,
            token: "frobnicate".to_owned()
        })
    );
}

#[test]
fn test_literal_tokens_are_not_dispatched() {
    // The literal is consumed by the set instruction, never executed, even
    // though "300"-style tokens have no instruction mapping.
    let mut run = TestRun::new("setd 25 outputd");
    run.run().unwrap();
    assert_eq!(run.output(), "25\n");
}

#[test]
fn test_skipped_tokens_are_never_decoded() {
    // The register is zero, so the loop body is skipped textually; a token
    // that would fault if dispatched goes unnoticed.
    let mut run = TestRun::new("{ frobnicate } outputd");
    run.run().unwrap();
    assert_eq!(run.output(), "0\n");
}

//! Byte input for the interpreter.
//!
//! This module defines the input seam the interpreter reads through. It provides:
//! 1. **The `Input` trait:** Raw bytes for `inputc` and whitespace-delimited
//!    tokens for the numeric input forms.
//! 2. **`TokenReader`:** The standard implementation over any `Read` stream.
//! 3. **Parsers:** The numeric input interpretations (binary keeps the last
//!    eight bits, hex the last two digits, decimal wraps modulo 256).
//!
//! Hosts own the output side as a plain `Write`; input needs its own trait
//! because token reads carry one byte of lookahead across calls.

use std::io::Read;

/// Input stream as the interpreter consumes it.
///
/// A `None` from either method means the stream is exhausted. Under the
/// default configuration the interpreter substitutes 0 and continues.
pub trait Input {
    /// Reads the next raw byte, whitespace included.
    fn read_char(&mut self) -> Option<u8>;

    /// Skips whitespace, then reads one maximal non-whitespace token.
    fn read_token(&mut self) -> Option<String>;
}

/// [`Input`] over any byte stream.
///
/// Reads are blocking and unbuffered beyond one byte of lookahead: the byte
/// that terminates a token read stays available for a following `read_char`.
pub struct TokenReader<R> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> TokenReader<R> {
    /// Wraps a byte stream.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.peeked.take() {
            return Some(byte);
        }
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}

impl<R: Read> Input for TokenReader<R> {
    fn read_char(&mut self) -> Option<u8> {
        self.next_byte()
    }

    fn read_token(&mut self) -> Option<String> {
        let mut byte = self.next_byte()?;
        while byte.is_ascii_whitespace() {
            byte = self.next_byte()?;
        }

        let mut token = String::new();
        loop {
            token.push(byte as char);
            match self.next_byte() {
                Some(next) if next.is_ascii_whitespace() => {
                    // Keep the terminator for a following read_char.
                    self.peeked = Some(next);
                    break;
                }
                Some(next) => byte = next,
                None => break,
            }
        }
        Some(token)
    }
}

/// Interprets a token as binary, keeping the last eight bits.
pub fn parse_binary(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    let tail = &token[token.len().saturating_sub(8)..];
    u8::from_str_radix(tail, 2).ok()
}

/// Interprets a token as decimal, wrapping modulo 256.
pub fn parse_decimal(token: &str) -> Option<u8> {
    token.parse::<u64>().ok().map(|value| (value & 0xFF) as u8)
}

/// Interprets a token as hexadecimal, keeping the last two digits.
pub fn parse_hex(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let tail = &token[token.len().saturating_sub(2)..];
    u8::from_str_radix(tail, 16).ok()
}

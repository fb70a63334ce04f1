//! Brainfuck to RTL translation.
//!
//! This module rewrites a tape-based Brainfuck program into one line of RTL
//! tokens by pure per-symbol text substitution. It performs:
//! 1. **Comment stripping:** Everything outside the eight command symbols is
//!    treated as comment and dropped.
//! 2. **Substitution:** Each symbol expands to a fixed RTL token sequence with
//!    no runtime semantics of its own; the engine consumes the output with no
//!    special-casing.
//!
//! The Brainfuck tape maps onto sibling cells of the root cube. The pointer
//! moves by turning: `F U B2` is a fixed turn word whose repeated application
//! walks the active position around a 21-cell circuit of the cube, and
//! `B2 U' F'` is its inverse. Twenty-one is the most a fixed word can reach:
//! the cube's corner-orientation invariant caps any turn word's orbit through
//! one position at 7 corners times 3 twists, so three of the 24 cells stay
//! off-circuit. The tape wraps after 21 cells.

use std::fs;
use std::io;
use std::path::Path;

/// Pointer right: advance the sibling circuit by one cell.
const MOVE_RIGHT: &str = "F U B2";
/// Pointer left: the inverse turn word.
const MOVE_LEFT: &str = "B2 U' F'";
/// Cell increment, mediated by the register.
const INCREMENT: &str = "gsetd 1 +";
/// Cell decrement, mediated by the register.
const DECREMENT: &str = "gsetd 1 -";
/// Loop open: mirror the cell into the register, then the native loop begin.
const LOOP_OPEN: &str = "ptg {";
/// Loop close: refresh the register so the header re-test sees the cell.
const LOOP_CLOSE: &str = "ptg }";

/// Expands one Brainfuck command symbol, or `None` for comment characters.
fn expansion(symbol: char) -> Option<&'static str> {
    match symbol {
        '>' => Some(MOVE_RIGHT),
        '<' => Some(MOVE_LEFT),
        '+' => Some(INCREMENT),
        '-' => Some(DECREMENT),
        '[' => Some(LOOP_OPEN),
        ']' => Some(LOOP_CLOSE),
        ',' => Some("inputc"),
        '.' => Some("outputc"),
        _ => None,
    }
}

/// Translates Brainfuck source text into one line of RTL tokens.
pub fn translate(source: &str) -> String {
    let mut line = String::new();
    for symbol in source.chars() {
        if let Some(tokens) = expansion(symbol) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(tokens);
        }
    }
    line
}

/// Translates a Brainfuck file and writes the RTL program next to a trailing
/// newline.
///
/// # Errors
///
/// Returns the underlying I/O error if the source cannot be read or the
/// output cannot be written.
pub fn translate_file(source: &Path, output: &Path) -> io::Result<()> {
    let text = fs::read_to_string(source)?;
    let mut line = translate(&text);
    line.push('\n');
    fs::write(output, line)
}

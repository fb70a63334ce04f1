//! Source loader.
//!
//! This module turns raw RTL source text into the ordered token sequence the
//! interpreter executes. It performs:
//! 1. **Comment stripping:** `#` starts a line comment running to end of line,
//!    removed before tokenizing.
//! 2. **Tokenizing:** Tokens are maximal non-whitespace runs. Stripped source
//!    that begins with whitespace yields a single leading empty token (the
//!    empty token is a no-op instruction), keeping counter positions stable
//!    for programs that open with a comment line.

use std::fs;
use std::io;
use std::path::Path;

/// Reads RTL source text from a file.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub fn read_source(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Removes `#`-comments, preserving line structure.
pub fn strip_comments(source: &str) -> String {
    let mut stripped = String::with_capacity(source.len());
    for (i, line) in source.lines().enumerate() {
        if i > 0 {
            stripped.push('\n');
        }
        match line.find('#') {
            Some(start) => stripped.push_str(&line[..start]),
            None => stripped.push_str(line),
        }
    }
    stripped
}

/// Splits source text into the executable token sequence.
pub fn tokenize(source: &str) -> Vec<String> {
    let stripped = strip_comments(source);

    let mut tokens = Vec::new();
    if stripped.starts_with(|c: char| c.is_whitespace()) {
        tokens.push(String::new());
    }
    tokens.extend(stripped.split_whitespace().map(str::to_owned));
    tokens
}

/// Reads and tokenizes an RTL source file in one step.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub fn load_program(path: &Path) -> io::Result<Vec<String>> {
    Ok(tokenize(&read_source(path)?))
}

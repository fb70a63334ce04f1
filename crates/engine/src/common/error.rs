//! Fault definitions.
//!
//! This module defines the fatal conditions that terminate an RTL program. It provides:
//! 1. **Fault Representation:** A closed enumeration of every fatal condition.
//! 2. **Diagnostics:** Each variant carries the program counter and, where one
//!    exists, the offending token, so hosts can report the exact failure site.
//!
//! Input exhaustion and malformed input tokens are deliberately absent from the
//! default fault set: input instructions substitute 0 and continue. The
//! [`Fault::InputExhausted`] variant is only raised under strict-input
//! configuration.

use thiserror::Error;

/// Fatal execution faults.
///
/// A fault halts execution immediately at the current program counter; the
/// interpreter performs no retry or partial recovery. Reaching the end of the
/// token sequence is a clean halt, not a fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A token with no mapping in the instruction set was dispatched.
    #[error("invalid command '{token}' at pc = {pc}")]
    UnknownInstruction {
        /// Counter position of the offending token.
        pc: usize,
        /// The unmapped token text.
        token: String,
    },

    /// A `set`-family literal was unparseable or outside the byte range.
    #[error("literal '{token}' is not a byte value (at pc = {pc})")]
    LiteralOutOfRange {
        /// Counter position of the literal token.
        pc: usize,
        /// The offending literal text.
        token: String,
    },

    /// A `set`-family instruction sat at the end of the program with no
    /// literal token left to consume.
    #[error("'{token}' at pc = {pc} expects a literal but the program ends")]
    MissingLiteral {
        /// Counter position of the instruction token.
        pc: usize,
        /// The instruction token text.
        token: String,
    },

    /// A `}` was dispatched with an empty loop-control stack.
    #[error("'}}' with no open loop at pc = {pc}")]
    UnmatchedLoopEnd {
        /// Counter position of the unmatched `}`.
        pc: usize,
    },

    /// A `{` skip scan ran off the end of the token sequence.
    #[error("'{{' at pc = {pc} has no matching '}}'")]
    UnmatchedLoopBegin {
        /// Counter position of the unmatched `{`.
        pc: usize,
    },

    /// `/` or `%` was dispatched while the register held zero.
    #[error("'{op}' by zero register at pc = {pc}")]
    DivisionByZero {
        /// Counter position of the arithmetic token.
        pc: usize,
        /// The offending operator (`/` or `%`).
        op: char,
    },

    /// An input instruction found the stream exhausted under strict-input
    /// configuration. Never raised under the default permissive policy.
    #[error("input exhausted at pc = {pc}")]
    InputExhausted {
        /// Counter position of the input token.
        pc: usize,
    },
}

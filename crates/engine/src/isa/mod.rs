//! The RTL instruction set.

/// The closed instruction enumeration and token parsing.
pub mod instruction;

pub use instruction::{ArithOp, InputForm, Instruction, LiteralForm, OutputForm, Target};

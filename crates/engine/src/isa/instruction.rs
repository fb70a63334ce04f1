//! Instruction encoding for RTL tokens.
//!
//! This module defines the closed instruction set as a tagged enumeration
//! dispatched by exhaustive matching, in place of a string-keyed lookup table
//! that can silently miss entries. Tokens are parsed at dispatch time, not
//! load time, so an unmapped token only faults when the program counter
//! actually reaches it.

use crate::memory::{Axis, Face};

/// Where a `set`-family instruction stores its literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// The active cell (facelet 0 of the active cube).
    Cell,
    /// The shared register.
    Register,
}

/// How a `set`-family literal token is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralForm {
    /// First character of the token, truncated to one byte.
    Char,
    /// Decimal in `0..=255`; anything else is a fault.
    Decimal,
    /// Hexadecimal in `0..=FF`; anything else is a fault.
    Hex,
}

/// The textual form an input instruction reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputForm {
    /// A run of binary digits; the last eight bits are kept.
    Binary,
    /// One raw byte, whitespace included.
    Char,
    /// A decimal number, wrapped modulo 256.
    Decimal,
    /// A run of hex digits; the last two are kept.
    Hex,
}

/// The textual form an output instruction writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputForm {
    /// Eight zero-padded binary digits plus newline.
    Binary,
    /// The raw byte, no newline.
    Char,
    /// Unsigned decimal plus newline.
    Decimal,
    /// Lowercase hex plus newline.
    HexLower,
    /// Uppercase hex plus newline.
    HexUpper,
}

/// Arithmetic between the active cell and the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`: cell + register, wrapping.
    Add,
    /// `-`: cell - register, wrapping.
    Subtract,
    /// `*`: cell * register, wrapping.
    Multiply,
    /// `/`: cell / register; zero register is a fault.
    Divide,
    /// `%`: cell % register; zero register is a fault.
    Modulo,
}

impl ArithOp {
    /// The operator's source token character, for fault reports.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }
}

/// One decoded RTL instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `setc`/`setd`/`setx`/`gsetc`/`gsetd`/`gsetx`: store the next token,
    /// interpreted per `form`, into `target`. Consumes one literal token.
    Set {
        /// Destination of the literal.
        target: Target,
        /// Interpretation of the literal token.
        form: LiteralForm,
    },
    /// `gtp`: store the register value into the active cell.
    CopyRegisterToCell,
    /// `ptg`: store the active cell value into the register.
    CopyCellToRegister,
    /// `g++`: add 1 to the register, wrapping.
    IncrementRegister,
    /// `g--`: subtract 1 from the register, wrapping.
    DecrementRegister,
    /// `inputb`/`inputc`/`inputd`/`inputx`: read from the input stream into
    /// the active cell; exhausted or malformed input stores 0.
    Input(InputForm),
    /// `outputb`/`outputc`/`outputd`/`outputx`/`outputX`: write the active
    /// cell to the output stream.
    Output(OutputForm),
    /// `+` `-` `*` `/` `%`: combine the active cell and the register.
    Arith(ArithOp),
    /// `{`: enter a loop, or skip to the matching `}` when the register is 0.
    LoopBegin,
    /// `}`: jump back so the loop header is re-evaluated.
    LoopEnd,
    /// `v`: move to the active cell's child cube, allocating it on first use.
    Descend,
    /// `^`: move to the parent cube; a no-op at the root.
    Ascend,
    /// Face turns (`U`, `U2`, `U'`, ... for all six faces).
    Turn(Face, i32),
    /// Whole-cube rotations (`x`, `x2`, `x'`, `y`, ..., `z'`).
    Rotate(Axis, i32),
    /// The empty token: a no-op, tolerating repeated whitespace in source.
    Nop,
}

impl Instruction {
    /// Decodes one token, or `None` for a token outside the instruction set.
    pub fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "setc" => Self::Set {
                target: Target::Cell,
                form: LiteralForm::Char,
            },
            "setd" => Self::Set {
                target: Target::Cell,
                form: LiteralForm::Decimal,
            },
            "setx" => Self::Set {
                target: Target::Cell,
                form: LiteralForm::Hex,
            },
            "gsetc" => Self::Set {
                target: Target::Register,
                form: LiteralForm::Char,
            },
            "gsetd" => Self::Set {
                target: Target::Register,
                form: LiteralForm::Decimal,
            },
            "gsetx" => Self::Set {
                target: Target::Register,
                form: LiteralForm::Hex,
            },
            "gtp" => Self::CopyRegisterToCell,
            "ptg" => Self::CopyCellToRegister,
            "g++" => Self::IncrementRegister,
            "g--" => Self::DecrementRegister,
            "inputb" => Self::Input(InputForm::Binary),
            "inputc" => Self::Input(InputForm::Char),
            "inputd" => Self::Input(InputForm::Decimal),
            "inputx" => Self::Input(InputForm::Hex),
            "outputb" => Self::Output(OutputForm::Binary),
            "outputc" => Self::Output(OutputForm::Char),
            "outputd" => Self::Output(OutputForm::Decimal),
            "outputx" => Self::Output(OutputForm::HexLower),
            "outputX" => Self::Output(OutputForm::HexUpper),
            "+" => Self::Arith(ArithOp::Add),
            "-" => Self::Arith(ArithOp::Subtract),
            "*" => Self::Arith(ArithOp::Multiply),
            "/" => Self::Arith(ArithOp::Divide),
            "%" => Self::Arith(ArithOp::Modulo),
            "{" => Self::LoopBegin,
            "}" => Self::LoopEnd,
            "v" => Self::Descend,
            "^" => Self::Ascend,
            "U" => Self::Turn(Face::U, 1),
            "U2" => Self::Turn(Face::U, 2),
            "U'" => Self::Turn(Face::U, -1),
            "L" => Self::Turn(Face::L, 1),
            "L2" => Self::Turn(Face::L, 2),
            "L'" => Self::Turn(Face::L, -1),
            "F" => Self::Turn(Face::F, 1),
            "F2" => Self::Turn(Face::F, 2),
            "F'" => Self::Turn(Face::F, -1),
            "R" => Self::Turn(Face::R, 1),
            "R2" => Self::Turn(Face::R, 2),
            "R'" => Self::Turn(Face::R, -1),
            "B" => Self::Turn(Face::B, 1),
            "B2" => Self::Turn(Face::B, 2),
            "B'" => Self::Turn(Face::B, -1),
            "D" => Self::Turn(Face::D, 1),
            "D2" => Self::Turn(Face::D, 2),
            "D'" => Self::Turn(Face::D, -1),
            "x" => Self::Rotate(Axis::X, 1),
            "x2" => Self::Rotate(Axis::X, 2),
            "x'" => Self::Rotate(Axis::X, -1),
            "y" => Self::Rotate(Axis::Y, 1),
            "y2" => Self::Rotate(Axis::Y, 2),
            "y'" => Self::Rotate(Axis::Y, -1),
            "z" => Self::Rotate(Axis::Z, 1),
            "z2" => Self::Rotate(Axis::Z, 2),
            "z'" => Self::Rotate(Axis::Z, -1),
            "" => Self::Nop,
            _ => return None,
        })
    }
}

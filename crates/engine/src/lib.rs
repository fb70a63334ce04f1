//! RubikTreeLang (RTL) virtual machine library.
//!
//! This crate implements the RTL execution engine with the following:
//! 1. **Memory:** A tree of 24-facelet cube blocks with lazy child allocation.
//! 2. **Turn engine:** Face turns and whole-cube rotations as facelet permutations.
//! 3. **ISA:** The closed RTL instruction set with dispatch-time token parsing.
//! 4. **Core:** The interpreter state machine (dispatch, loop control, byte I/O).
//! 5. **Simulation:** Source loading, comment stripping, and tokenizing.

/// Common types (faults).
pub mod common;
/// Run configuration (defaults, JSON deserialization).
pub mod config;
/// Interpreter core (dispatch, loop control, I/O).
pub mod core;
/// Instruction set (token parsing, closed instruction enumeration).
pub mod isa;
/// Memory tree (facelets, cubes, turn permutations, the shared register).
pub mod memory;
/// Source loader (comment stripping, tokenizing).
pub mod sim;

/// Fatal execution faults; every variant carries the program counter.
pub use crate::common::Fault;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main interpreter type; holds the memory tree, counter, and loop stack.
pub use crate::core::Interpreter;

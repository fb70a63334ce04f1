//! The RTL execution engine.
//!
//! This module defines the central `Interpreter` structure, a state machine
//! over the token sequence. It coordinates the following:
//! 1. **State:** The active position (cube + program counter), the
//!    loop-control stack, and the terminal Running/Halted/Faulted state.
//! 2. **Dispatch:** Exhaustive-match execution of the closed instruction set.
//! 3. **I/O:** The byte input and output streams, owned as trait objects so
//!    hosts and tests substitute them freely.

/// Instruction dispatch and loop control.
mod dispatch;

/// Byte input seam and numeric input parsing.
pub mod io;

use std::io::Write;

use crate::common::Fault;
use crate::config::Config;
use crate::core::io::Input;
use crate::memory::{Cube, CubeId, CubeTree};

/// Execution state of an [`Interpreter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// The program counter is within bounds; stepping makes progress.
    Running,
    /// The counter reached the end of the token sequence. Terminal, clean.
    Halted,
    /// A fatal fault occurred. Terminal; the fault is kept for re-reporting.
    Faulted,
}

/// The RTL interpreter.
///
/// Execution is strictly single-threaded and synchronous: one instruction,
/// including any I/O it performs, completes fully before the next begins.
/// There is no engine-imposed step limit; non-terminating loop-control
/// programs run indefinitely.
pub struct Interpreter {
    tokens: Vec<String>,
    pc: usize,
    loop_stack: Vec<usize>,
    tree: CubeTree,
    active: CubeId,
    state: State,
    fault: Option<Fault>,
    config: Config,
    input: Box<dyn Input>,
    output: Box<dyn Write>,
}

impl Interpreter {
    /// Creates an interpreter over a token sequence.
    ///
    /// An empty token sequence is a program that halts on the first step.
    pub fn new(
        tokens: Vec<String>,
        config: Config,
        input: Box<dyn Input>,
        output: Box<dyn Write>,
    ) -> Self {
        let tree = CubeTree::new();
        let active = tree.root();
        Self {
            tokens,
            pc: 0,
            loop_stack: Vec::new(),
            tree,
            active,
            state: State::Running,
            fault: None,
            config,
            input,
            output,
        }
    }

    /// The token sequence under execution.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// The current execution state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The memory tree, for register value and cube lookup by identity.
    pub fn tree(&self) -> &CubeTree {
        &self.tree
    }

    /// Handle of the currently active cube.
    pub fn active_cube_id(&self) -> CubeId {
        self.active
    }

    /// The currently active cube, for rendering.
    pub fn active_cube(&self) -> &Cube {
        self.tree.cube(self.active)
    }
}

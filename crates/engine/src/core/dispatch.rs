//! Instruction dispatch and loop control.
//!
//! Each step parses the token at the program counter into the closed
//! instruction set and executes it by exhaustive match. Instructions that
//! take a literal consume the following token within the same step. Tokens
//! are never parsed ahead of the counter, so a bad token in a skipped or
//! unreached region faults only if execution actually reaches it.

use std::io::Write;

use tracing::{debug, trace};

use crate::common::Fault;
use crate::core::io;
use crate::core::{Interpreter, State};
use crate::isa::{ArithOp, InputForm, Instruction, LiteralForm, OutputForm, Target};
use crate::memory::Facelet;

/// Interprets a `set`-family literal token as one byte.
fn parse_literal(form: LiteralForm, token: &str) -> Option<u8> {
    match form {
        LiteralForm::Char => token.chars().next().map(|c| (c as u32) as u8),
        LiteralForm::Decimal => token
            .parse::<u16>()
            .ok()
            .filter(|value| *value <= 0xFF)
            .map(|value| value as u8),
        LiteralForm::Hex => u8::from_str_radix(token, 16).ok(),
    }
}

impl Interpreter {
    /// Executes the instruction at the program counter.
    ///
    /// Returns the state after the step. Stepping a halted interpreter is a
    /// no-op; stepping a faulted one returns the recorded fault again.
    ///
    /// # Errors
    ///
    /// Any fatal fault: an unmapped token, a bad or missing literal, an
    /// unmatched loop token, division by a zero register, or (under strict
    /// input) an exhausted input stream.
    pub fn step(&mut self) -> Result<State, Fault> {
        match self.state {
            State::Halted => return Ok(State::Halted),
            State::Faulted => {
                return match &self.fault {
                    Some(fault) => Err(fault.clone()),
                    None => Ok(State::Faulted),
                };
            }
            State::Running => {}
        }

        if self.pc >= self.tokens.len() {
            self.state = State::Halted;
            return Ok(State::Halted);
        }

        let token = self.tokens[self.pc].clone();
        let Some(instruction) = Instruction::parse(&token) else {
            return Err(self.fail(Fault::UnknownInstruction {
                pc: self.pc,
                token,
            }));
        };

        if self.config.trace_steps {
            trace!(pc = self.pc, token = %token, "dispatch");
        }

        self.pc = match self.exec(instruction, &token) {
            Ok(next) => next,
            Err(fault) => return Err(self.fail(fault)),
        };

        if self.pc >= self.tokens.len() {
            self.state = State::Halted;
        }
        Ok(self.state)
    }

    /// Steps until the program halts.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal fault; see [`Interpreter::step`].
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// Steps until the program counter reaches `end` or the program leaves
    /// the running state. The instruction at `end` is not executed.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal fault; see [`Interpreter::step`].
    pub fn run_until(&mut self, end: usize) -> Result<State, Fault> {
        while self.state == State::Running && self.pc < end {
            self.step()?;
        }
        Ok(self.state)
    }

    /// Records a fault and moves to the terminal faulted state.
    fn fail(&mut self, fault: Fault) -> Fault {
        debug!(%fault, "execution fault");
        self.state = State::Faulted;
        self.fault = Some(fault.clone());
        fault
    }

    /// Executes one decoded instruction and returns the next counter value.
    fn exec(&mut self, instruction: Instruction, token: &str) -> Result<usize, Fault> {
        let pc = self.pc;
        match instruction {
            Instruction::Set { target, form } => {
                let Some(literal) = self.tokens.get(pc + 1) else {
                    return Err(Fault::MissingLiteral {
                        pc,
                        token: token.to_owned(),
                    });
                };
                let Some(value) = parse_literal(form, literal) else {
                    return Err(Fault::LiteralOutOfRange {
                        pc,
                        token: literal.clone(),
                    });
                };
                match target {
                    Target::Cell => self.active_cell_mut().set_payload(value),
                    Target::Register => self.tree.set_register(value),
                }
                Ok(pc + 2)
            }
            Instruction::CopyRegisterToCell => {
                let value = self.tree.register();
                self.active_cell_mut().set_payload(value);
                Ok(pc + 1)
            }
            Instruction::CopyCellToRegister => {
                let value = self.active_cell().payload();
                self.tree.set_register(value);
                Ok(pc + 1)
            }
            Instruction::IncrementRegister => {
                self.tree.increment_register();
                Ok(pc + 1)
            }
            Instruction::DecrementRegister => {
                self.tree.decrement_register();
                Ok(pc + 1)
            }
            Instruction::Input(form) => {
                self.exec_input(form)?;
                Ok(pc + 1)
            }
            Instruction::Output(form) => {
                self.exec_output(form);
                Ok(pc + 1)
            }
            Instruction::Arith(op) => {
                self.exec_arith(op)?;
                Ok(pc + 1)
            }
            Instruction::LoopBegin => {
                if self.tree.register() == 0 {
                    // Skip the whole body without executing it.
                    let close = self.matching_loop_end()?;
                    Ok(close + 1)
                } else {
                    self.loop_stack.push(pc);
                    Ok(pc + 1)
                }
            }
            Instruction::LoopEnd => match self.loop_stack.pop() {
                // Back to the header so its condition is re-evaluated.
                Some(open) => Ok(open),
                None => Err(Fault::UnmatchedLoopEnd { pc }),
            },
            Instruction::Descend => {
                self.active = self.tree.descend(self.active);
                Ok(pc + 1)
            }
            Instruction::Ascend => {
                if let Some(parent) = self.tree.cube(self.active).parent() {
                    self.active = parent;
                }
                Ok(pc + 1)
            }
            Instruction::Turn(face, n) => {
                self.tree.cube_mut(self.active).turn(face, n);
                Ok(pc + 1)
            }
            Instruction::Rotate(axis, n) => {
                self.tree.cube_mut(self.active).rotate(axis, n);
                Ok(pc + 1)
            }
            Instruction::Nop => Ok(pc + 1),
        }
    }

    /// Locates the `}` matching the `{` at the current counter.
    ///
    /// The scan is depth-counted so nested loops inside the skipped body are
    /// stepped over, and purely textual so skipped tokens are never decoded.
    fn matching_loop_end(&self) -> Result<usize, Fault> {
        let open = self.pc;
        let mut depth = 0usize;
        for (offset, token) in self.tokens[open + 1..].iter().enumerate() {
            match token.as_str() {
                "{" => depth += 1,
                "}" if depth == 0 => return Ok(open + 1 + offset),
                "}" => depth -= 1,
                _ => {}
            }
        }
        Err(Fault::UnmatchedLoopBegin { pc: open })
    }

    fn exec_input(&mut self, form: InputForm) -> Result<(), Fault> {
        // Outer None: stream exhausted. Inner None: token present but
        // malformed for the requested form.
        let raw: Option<Option<u8>> = match form {
            InputForm::Char => self.input.read_char().map(Some),
            InputForm::Binary => self.input.read_token().map(|t| io::parse_binary(&t)),
            InputForm::Decimal => self.input.read_token().map(|t| io::parse_decimal(&t)),
            InputForm::Hex => self.input.read_token().map(|t| io::parse_hex(&t)),
        };

        let value = match raw {
            None if self.config.strict_input => {
                return Err(Fault::InputExhausted { pc: self.pc });
            }
            None => 0,
            Some(parsed) => parsed.unwrap_or(0),
        };
        self.active_cell_mut().set_payload(value);
        Ok(())
    }

    fn exec_output(&mut self, form: OutputForm) {
        let value = self.active_cell().payload();
        match form {
            OutputForm::Binary => {
                writeln!(self.output, "{value:08b}").ok();
            }
            OutputForm::Char => {
                self.output.write_all(&[value]).ok();
            }
            OutputForm::Decimal => {
                writeln!(self.output, "{value}").ok();
            }
            OutputForm::HexLower => {
                writeln!(self.output, "{value:x}").ok();
            }
            OutputForm::HexUpper => {
                writeln!(self.output, "{value:X}").ok();
            }
        }
        self.output.flush().ok();
    }

    fn exec_arith(&mut self, op: ArithOp) -> Result<(), Fault> {
        let register = self.tree.register();
        let cell = self.active_cell().payload();
        let value = match op {
            ArithOp::Add => cell.wrapping_add(register),
            ArithOp::Subtract => cell.wrapping_sub(register),
            ArithOp::Multiply => cell.wrapping_mul(register),
            ArithOp::Divide | ArithOp::Modulo if register == 0 => {
                return Err(Fault::DivisionByZero {
                    pc: self.pc,
                    op: op.symbol(),
                });
            }
            ArithOp::Divide => cell / register,
            ArithOp::Modulo => cell % register,
        };
        self.active_cell_mut().set_payload(value);
        Ok(())
    }

    fn active_cell(&self) -> &Facelet {
        self.tree.cube(self.active).active_cell()
    }

    fn active_cell_mut(&mut self) -> &mut Facelet {
        self.tree.cube_mut(self.active).active_cell_mut()
    }
}

//! Interactive stepping and inspection front end.
//!
//! The visualizer only sequences calls into the engine's step function and
//! renders its exposed state. It provides:
//! 1. **Stepping:** `step n`, `stepuntil pc`, and `run`, displaying the
//!    program state at the end of each step.
//! 2. **Inspection:** `displaycube id` for any cube by identity and `code`
//!    for the indexed token listing.
//! 3. **Lifecycle:** `restart` to reload the program and `exit`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use rtl_core::core::io::TokenReader;
use rtl_core::core::State;
use rtl_core::sim::loader;
use rtl_core::{Config, Interpreter};

/// The interactive visualizer session.
pub struct Visualizer {
    path: PathBuf,
    config: Config,
    interp: Interpreter,
}

impl Visualizer {
    /// Loads the program and builds a fresh interpreter over standard I/O.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the source file cannot be read.
    pub fn new(path: PathBuf, config: Config) -> io::Result<Self> {
        let interp = Self::build(&path, &config)?;
        Ok(Self {
            path,
            config,
            interp,
        })
    }

    fn build(path: &Path, config: &Config) -> io::Result<Interpreter> {
        let tokens = loader::load_program(path)?;
        Ok(Interpreter::new(
            tokens,
            config.clone(),
            Box::new(TokenReader::new(io::stdin())),
            Box::new(io::stdout()),
        ))
    }

    /// Handles user control of the visualizer until `exit` or end of input.
    pub fn run(&mut self) {
        println!("Welcome to the RubikTreeLang Visualizer.\n");
        display_valid_commands();

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return,
                Ok(_) => {}
            }

            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };

            match command {
                "step" => match parse_arg(parts.next()) {
                    Arg::Value(n) => self.step_at_most(n),
                    Arg::Negative => println!("Argument must be non-negative."),
                    Arg::Invalid => println!("Argument must be an integer."),
                },
                "stepuntil" => match parse_arg(parts.next()) {
                    Arg::Value(end) if end > self.interp.tokens().len() => {
                        println!("Specified end lies beyond end of program.");
                    }
                    Arg::Value(end) => self.step_until(end),
                    Arg::Negative => println!("Argument must be non-negative."),
                    Arg::Invalid => println!("Argument must be an integer."),
                },
                "run" => {
                    let end = self.interp.tokens().len();
                    self.step_until(end);
                }
                "displaycube" => match parse_arg(parts.next()) {
                    Arg::Value(id) => self.display_cube(id),
                    Arg::Negative => println!("Argument must be non-negative."),
                    Arg::Invalid => println!("Argument must be an integer."),
                },
                "restart" => self.restart(),
                "code" => self.display_code(),
                "exit" => return,
                _ => {
                    println!("Invalid command.\n");
                    display_valid_commands();
                }
            }
        }
    }

    /// Runs one step, displaying the consumed instruction before execution
    /// and the resulting state after it. Returns false on a fault.
    fn step_once(&mut self) -> bool {
        println!("----------------------------------------------------------\n");
        println!(
            "Consumed instruction {} at pc = {}",
            self.interp.tokens()[self.interp.pc()],
            self.interp.pc()
        );

        match self.interp.step() {
            Ok(_) => {
                println!(
                    "Global byte hex value: {:x}",
                    self.interp.tree().register()
                );
                println!("{}", self.interp.active_cube());
                println!();
                true
            }
            Err(fault) => {
                eprintln!("{fault}");
                false
            }
        }
    }

    /// Steps `steps` times or until the program terminates, whichever comes
    /// first.
    fn step_at_most(&mut self, steps: usize) {
        for taken in 0..steps {
            if self.interp.pc() >= self.interp.tokens().len()
                || self.interp.state() != State::Running
            {
                println!(
                    "step successfully executed {taken} steps before reaching the end of the program."
                );
                return;
            }
            if !self.step_once() {
                println!("step returned prematurely.");
                return;
            }
        }
        println!("All {steps} steps executed successfully.");
    }

    /// Steps until the program counter reaches `end`. The command at `end`
    /// is not executed.
    fn step_until(&mut self, end: usize) {
        while self.interp.pc() < end && self.interp.state() == State::Running {
            if !self.step_once() {
                println!("stepuntil or run returned prematurely.");
                return;
            }
        }
    }

    fn display_cube(&self, id: usize) {
        match self.interp.tree().find(id) {
            Some(cube) => println!("{cube}"),
            None => println!("Rubik's Cube with ID {id} does not exist."),
        }
    }

    /// Displays the code instruction sequence as an indexed list.
    fn display_code(&self) {
        let tokens = self.interp.tokens();
        for (pc, token) in tokens.iter().enumerate() {
            print!("{pc:<6}{token:<8}| ");
            if pc % 8 == 7 || pc == tokens.len() - 1 {
                println!();
            }
        }
    }

    /// Resets the program's state and memory by reloading the source file.
    fn restart(&mut self) {
        match Self::build(&self.path, &self.config) {
            Ok(interp) => self.interp = interp,
            Err(e) => eprintln!("[!] Could not reload '{}': {}", self.path.display(), e),
        }
    }
}

/// A parsed command argument.
enum Arg {
    /// A non-negative integer.
    Value(usize),
    /// An integer below zero.
    Negative,
    /// Missing or not an integer.
    Invalid,
}

fn parse_arg(raw: Option<&str>) -> Arg {
    match raw.map(str::parse::<i64>) {
        Some(Ok(value)) if value < 0 => Arg::Negative,
        Some(Ok(value)) => Arg::Value(value as usize),
        _ => Arg::Invalid,
    }
}

/// Prints all valid visualizer commands.
fn display_valid_commands() {
    println!("Things you can tell the Visualizer to do:");
    println!("\tstep n (n is a non-negative integer):");
    println!(
        "\t\tAdvances program by at most n steps and displays the program state at the end of each step."
    );
    println!("\tstepuntil pc (pc is a non-negative integer):");
    println!(
        "\t\tAdvances program until its program counter reaches the value pc and displays the program state at the end of each step."
    );
    println!("\trun:");
    println!(
        "\t\tFinishes execution of the program and displays the program state at the end of each step."
    );
    println!("\tdisplaycube id (id is a non-negative integer):");
    println!("\t\tDisplays the cube with ID id.");
    println!("\trestart:");
    println!("\t\tResets the program's state/memory.");
    println!("\tcode:");
    println!("\t\tPrints the code's instruction sequence as an indexed list.");
    println!("\texit:");
    println!("\t\tExits the Visualizer.");
}

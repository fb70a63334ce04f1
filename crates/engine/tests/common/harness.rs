use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use rtl_core::core::io::TokenReader;
use rtl_core::sim::loader;
use rtl_core::{Config, Fault, Interpreter};

/// Output sink shared between the harness and the interpreter it built.
#[derive(Clone, Default)]
pub struct SharedOutput(Arc<Mutex<Vec<u8>>>);

impl SharedOutput {
    fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// An interpreter over source text, with scripted input and captured output.
pub struct TestRun {
    /// The interpreter under test.
    pub interp: Interpreter,
    output: SharedOutput,
}

impl TestRun {
    /// Builds a run with an empty input stream.
    pub fn new(source: &str) -> Self {
        Self::with_input(source, "")
    }

    /// Builds a run fed by the given input text.
    pub fn with_input(source: &str, input: &str) -> Self {
        Self::with_config(source, input, Config::default())
    }

    /// Builds a run with a specific configuration.
    pub fn with_config(source: &str, input: &str, config: Config) -> Self {
        let tokens = loader::tokenize(source);
        let output = SharedOutput::default();
        let reader = TokenReader::new(Cursor::new(input.as_bytes().to_vec()));
        let interp = Interpreter::new(tokens, config, Box::new(reader), Box::new(output.clone()));
        Self { interp, output }
    }

    /// Runs to completion.
    pub fn run(&mut self) -> Result<(), Fault> {
        self.interp.run()
    }

    /// Everything the program wrote so far, as UTF-8 text.
    pub fn output(&self) -> String {
        String::from_utf8(self.output.contents()).unwrap()
    }

    /// Everything the program wrote so far, as raw bytes.
    pub fn output_bytes(&self) -> Vec<u8> {
        self.output.contents()
    }

    /// Payload of the active cell after execution.
    pub fn cell(&self) -> u8 {
        self.interp.active_cube().active_cell().payload()
    }

    /// The shared register after execution.
    pub fn register(&self) -> u8 {
        self.interp.tree().register()
    }
}

/// Runs a source program with no input and returns its output, expecting a
/// clean halt.
pub fn run_program(source: &str) -> String {
    let mut run = TestRun::new(source);
    run.run().unwrap();
    run.output()
}

/// Runs a source program against scripted input and returns its output,
/// expecting a clean halt.
pub fn run_with_input(source: &str, input: &str) -> String {
    let mut run = TestRun::with_input(source, input);
    run.run().unwrap();
    run.output()
}

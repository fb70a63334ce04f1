//! RubikTreeLang command-line host.
//!
//! This binary provides a single entry point for the RTL tooling. It performs:
//! 1. **Run:** Execute an RTL program to completion over standard I/O.
//! 2. **Debug:** Step through a program interactively with cube inspection.
//! 3. **Translate:** Rewrite a Brainfuck source file into RTL tokens.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use rtl_core::core::io::TokenReader;
use rtl_core::sim::loader;
use rtl_core::{Config, Interpreter};

mod translate;
mod visualizer;

#[derive(Parser, Debug)]
#[command(
    name = "rtl",
    version,
    about = "RubikTreeLang interpreter, visualizer, and translator",
    long_about = "Run an RTL program, step through it interactively, or translate Brainfuck into RTL.\n\nExamples:\n  rtl run demos/cat.rtl\n  rtl debug demos/hello.rtl\n  rtl translate program.bf program.rtl"
)]
struct Cli {
    /// Optional JSON configuration file (trace_steps, strict_input).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Bare `.rtl` path: shorthand for `rtl debug <file>`.
    #[arg(value_name = "FILE.rtl")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute an RTL program to completion.
    Run {
        /// RTL source file.
        file: PathBuf,
    },

    /// Step through an RTL program interactively.
    Debug {
        /// RTL source file.
        file: PathBuf,
    },

    /// Translate a Brainfuck source file into one line of RTL tokens.
    Translate {
        /// Brainfuck source file.
        source: PathBuf,
        /// Where to write the RTL program.
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Some(Commands::Run { file }) => cmd_run(&file, config),
        Some(Commands::Debug { file }) => cmd_debug(file, config),
        Some(Commands::Translate { source, output }) => {
            translate::translate_file(&source, &output)
                .unwrap_or_else(|e| fatal(&format!("Translation failed: {e}")));
        }
        None => match cli.file {
            Some(file) => cmd_debug(file, config),
            None => {
                eprintln!("RubikTreeLang — pass a subcommand or an .rtl file");
                eprintln!();
                eprintln!("  rtl run <file.rtl>         Execute to completion");
                eprintln!("  rtl debug <file.rtl>       Interactive visualizer");
                eprintln!("  rtl <file.rtl>             Same, shorthand");
                eprintln!("  rtl translate <bf> <rtl>   Brainfuck to RTL");
                eprintln!();
                eprintln!("  rtl --help  for full options");
                process::exit(1);
            }
        },
    }
}

fn cmd_debug(file: PathBuf, config: Config) {
    let mut session = visualizer::Visualizer::new(file, config)
        .unwrap_or_else(|e| fatal(&format!("Could not load program: {e}")));
    session.run();
}

/// Prints a fatal message and exits with a failure status.
fn fatal(message: &str) -> ! {
    eprintln!("\n[!] FATAL: {message}");
    process::exit(1);
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| fatal(&format!("Could not read config '{}': {e}", path.display())));
    Config::from_json(&text)
        .unwrap_or_else(|e| fatal(&format!("Bad config '{}': {e}", path.display())))
}

/// Loads a program and loops on `step` until clean halt or fault.
fn cmd_run(path: &Path, config: Config) {
    let tokens = loader::load_program(path)
        .unwrap_or_else(|e| fatal(&format!("Could not read file '{}': {e}", path.display())));

    let mut interp = Interpreter::new(
        tokens,
        config,
        Box::new(TokenReader::new(io::stdin())),
        Box::new(io::stdout()),
    );

    if let Err(fault) = interp.run() {
        eprintln!("\n[!] FATAL FAULT: {fault}");
        process::exit(1);
    }
    io::stdout().flush().ok();
}

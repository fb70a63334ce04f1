//! Configuration for the RTL interpreter.
//!
//! This module defines the run configuration. It provides:
//! 1. **Defaults:** Baseline behavior matching the language's final semantics.
//! 2. **Structures:** A serde-deserializable [`Config`] supplied as JSON by hosts.
//!
//! Configuration is supplied via JSON (see [`Config::from_json`]) or use
//! `Config::default()` for the CLI.

use serde::Deserialize;

/// Default configuration constants for the interpreter.
mod defaults {
    /// Per-step dispatch tracing is off by default.
    pub const TRACE_STEPS: bool = false;

    /// Exhausted input substitutes 0 and continues.
    ///
    /// Earlier revisions of the language treated an exhausted input stream as
    /// fatal; the permissive policy is the final behavior. Strict mode keeps
    /// the old behavior reachable for programs that rely on it.
    pub const STRICT_INPUT: bool = false;
}

/// Run configuration for an [`Interpreter`](crate::core::Interpreter).
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit a `tracing` event for every dispatched instruction.
    pub trace_steps: bool,

    /// Treat an exhausted input stream as a fatal fault instead of
    /// substituting 0. Malformed input tokens still substitute 0.
    pub strict_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_steps: defaults::TRACE_STEPS,
            strict_input: defaults::STRICT_INPUT,
        }
    }
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// Unknown fields are rejected so that a typo in a config file does not
    /// silently fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

//! Program loading.

/// Source reading, comment stripping, and tokenizing.
pub mod loader;

//! The RTL memory tree.
//!
//! This module implements the cube-shaped memory model. It provides:
//! 1. **Facelet:** One byte-sized cell that may lazily own a child cube.
//! 2. **Cube:** A fixed block of 24 facelets with the face-turn permutation engine.
//! 3. **CubeTree:** The arena owning every cube, the identity counter, and the
//!    register byte shared by the whole tree.

/// Cube blocks, faces, axes, and the turn permutation engine.
pub mod cube;
/// The byte-sized memory cell.
pub mod facelet;
/// The cube arena and the shared register.
pub mod tree;

pub use cube::{Axis, Cube, Face};
pub use facelet::Facelet;
pub use tree::{CubeId, CubeTree};

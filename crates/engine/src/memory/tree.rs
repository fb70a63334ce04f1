//! The cube arena and the shared register.
//!
//! This module owns every cube in a program's memory. It provides:
//! 1. **Identity:** Cubes live in an arena whose index is the cube identity,
//!    so identities are unique, dense, and strictly increasing in creation
//!    order, starting at 0 for the root.
//! 2. **Lazy allocation:** A child cube is created the first time a descend
//!    targets a facelet without one, and persists for the tree's lifetime.
//! 3. **The register:** The single byte shared by the whole tree, used as the
//!    implicit arithmetic operand and the loop condition.

use std::fmt;

use tracing::debug;

use crate::memory::cube::Cube;

/// Handle to a cube in the tree.
///
/// The handle is the cube's immutable identity: the position it was allocated
/// at. Handles are only minted by the tree and cubes are never removed, so a
/// handle stays valid for the tree's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeId(usize);

impl CubeId {
    /// The root cube's identity.
    pub const ROOT: Self = Self(0);

    /// The identity as a plain index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The tree of cubes rooted at one designated root cube.
#[derive(Clone, Debug)]
pub struct CubeTree {
    cubes: Vec<Cube>,
    register: u8,
}

impl CubeTree {
    /// Creates a tree holding a single zeroed root cube and a zero register.
    pub fn new() -> Self {
        Self {
            cubes: vec![Cube::new(CubeId::ROOT, None)],
            register: 0,
        }
    }

    /// The root cube's handle.
    pub fn root(&self) -> CubeId {
        CubeId::ROOT
    }

    /// Number of cubes allocated so far.
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Always false: the root exists from construction.
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// The cube behind a handle.
    pub fn cube(&self, id: CubeId) -> &Cube {
        &self.cubes[id.0]
    }

    /// Mutable access to the cube behind a handle.
    pub fn cube_mut(&mut self, id: CubeId) -> &mut Cube {
        &mut self.cubes[id.0]
    }

    /// Looks up a cube by raw identity, for host tooling working from user
    /// input. Identities are dense, so this is the arena index.
    pub fn find(&self, id: usize) -> Option<&Cube> {
        self.cubes.get(id)
    }

    /// Moves down from `from`'s active cell, allocating the child cube on
    /// first use.
    pub fn descend(&mut self, from: CubeId) -> CubeId {
        if let Some(child) = self.cube(from).active_cell().child() {
            return child;
        }

        let child = CubeId(self.cubes.len());
        self.cubes.push(Cube::new(child, Some(from)));
        self.cube_mut(from).active_cell_mut().set_child(child);
        debug!(parent = %from, child = %child, "allocated child cube");
        child
    }

    /// The shared register byte.
    pub fn register(&self) -> u8 {
        self.register
    }

    /// Stores a register byte.
    pub fn set_register(&mut self, value: u8) {
        self.register = value;
    }

    /// Adds one to the register, wrapping modulo 256.
    pub fn increment_register(&mut self) {
        self.register = self.register.wrapping_add(1);
    }

    /// Subtracts one from the register, wrapping modulo 256.
    pub fn decrement_register(&mut self) {
        self.register = self.register.wrapping_sub(1);
    }
}

impl Default for CubeTree {
    fn default() -> Self {
        Self::new()
    }
}

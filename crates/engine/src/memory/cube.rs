//! Cube blocks and the turn permutation engine.
//!
//! This module implements the geometric heart of the memory model. It provides:
//! 1. **Faces and axes:** Closed enumerations of the six turnable faces and the
//!    three whole-cube rotation axes.
//! 2. **Turns:** Each face turn as three simultaneous disjoint 4-cycles over
//!    facelet positions, carrying payloads and child handles together.
//! 3. **Rendering:** The net-layout display used by the visualizer.

use std::fmt;

use crate::memory::facelet::Facelet;
use crate::memory::tree::CubeId;

/// Number of facelets in one cube block.
pub const FACELET_COUNT: usize = 24;

/// Cube cell layout (the cube's net):
///
/// ```text
///                17 18
///                19 20
///
/// 21 22   23  0    1  2    3  4
///  5  6    7  8    9 10   11 12
///
///                13 14
///                15 16
/// ```
///
/// Facelet 0 is the active cell: the only cell data instructions touch.
/// Every turn comprises three disjoint four-cycles on these positions.
const U_CYCLES: [[usize; 4]; 3] = [[17, 18, 20, 19], [4, 2, 0, 22], [21, 3, 1, 23]];

const L_CYCLES: [[usize; 4]; 3] = [[21, 22, 6, 5], [17, 23, 13, 12], [4, 19, 7, 15]];

const F_CYCLES: [[usize; 4]; 3] = [[23, 0, 8, 7], [19, 1, 14, 6], [22, 20, 9, 13]];

const R_CYCLES: [[usize; 4]; 3] = [[1, 2, 10, 9], [20, 3, 16, 8], [0, 18, 11, 14]];

const B_CYCLES: [[usize; 4]; 3] = [[3, 4, 12, 11], [18, 21, 15, 10], [2, 17, 5, 16]];

const D_CYCLES: [[usize; 4]; 3] = [[13, 14, 16, 15], [7, 9, 11, 5], [6, 8, 10, 12]];

/// The six turnable cube faces.
///
/// The closed enumeration makes an unrecognized face unrepresentable; the
/// construction-time fault of a string-keyed face lookup has no equivalent
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// Up.
    U,
    /// Left.
    L,
    /// Front.
    F,
    /// Right.
    R,
    /// Back.
    B,
    /// Down.
    D,
}

impl Face {
    /// All six faces, for iteration in tests and tooling.
    pub const ALL: [Self; 6] = [Self::U, Self::L, Self::F, Self::R, Self::B, Self::D];

    /// The three facelet 4-cycles a quarter turn of this face advances.
    const fn cycles(self) -> &'static [[usize; 4]; 3] {
        match self {
            Self::U => &U_CYCLES,
            Self::L => &L_CYCLES,
            Self::F => &F_CYCLES,
            Self::R => &R_CYCLES,
            Self::B => &B_CYCLES,
            Self::D => &D_CYCLES,
        }
    }

    /// The geometrically opposite face.
    pub const fn opposite(self) -> Self {
        match self {
            Self::U => Self::D,
            Self::D => Self::U,
            Self::L => Self::R,
            Self::R => Self::L,
            Self::F => Self::B,
            Self::B => Self::F,
        }
    }
}

/// Whole-cube rotation axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rotation around the R face (R and L' together).
    X,
    /// Rotation around the U face (U and D' together).
    Y,
    /// Rotation around the F face (F and B' together).
    Z,
}

impl Axis {
    /// All three axes, for iteration in tests and tooling.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The face a positive rotation of this axis turns clockwise. The
    /// opposite face turns counter-clockwise by the same amount.
    pub const fn leading_face(self) -> Face {
        match self {
            Self::X => Face::R,
            Self::Y => Face::U,
            Self::Z => Face::F,
        }
    }
}

/// One fixed block of 24 facelets.
///
/// A cube carries a non-owning back-handle to its parent (absent for the
/// root) and an immutable identity assigned once at creation.
#[derive(Clone, Debug)]
pub struct Cube {
    facelets: [Facelet; FACELET_COUNT],
    parent: Option<CubeId>,
    id: CubeId,
}

impl Cube {
    /// Creates a zeroed cube. Only the tree mints cubes, so identities stay
    /// dense and parents stay consistent.
    pub(crate) fn new(id: CubeId, parent: Option<CubeId>) -> Self {
        Self {
            facelets: [Facelet::default(); FACELET_COUNT],
            parent,
            id,
        }
    }

    /// This cube's immutable identity.
    pub fn id(&self) -> CubeId {
        self.id
    }

    /// The parent cube handle; `None` for the root.
    pub fn parent(&self) -> Option<CubeId> {
        self.parent
    }

    /// The active cell: facelet 0, the only cell data instructions address.
    pub fn active_cell(&self) -> &Facelet {
        &self.facelets[0]
    }

    /// Mutable access to the active cell.
    pub fn active_cell_mut(&mut self) -> &mut Facelet {
        &mut self.facelets[0]
    }

    /// All facelets in net order. Not a language feature: the visualizer and
    /// the tests read whole cubes through this.
    pub fn facelets(&self) -> &[Facelet; FACELET_COUNT] {
        &self.facelets
    }

    /// Mutable access to all facelets. Not a language feature either; data
    /// instructions only ever touch facelet 0.
    pub fn facelets_mut(&mut self) -> &mut [Facelet; FACELET_COUNT] {
        &mut self.facelets
    }

    /// Advances one 4-cycle a single step, carrying whole facelets.
    fn cycle_permute(&mut self, cycle: &[usize; 4]) {
        let last = self.facelets[cycle[3]];
        self.facelets[cycle[3]] = self.facelets[cycle[2]];
        self.facelets[cycle[2]] = self.facelets[cycle[1]];
        self.facelets[cycle[1]] = self.facelets[cycle[0]];
        self.facelets[cycle[0]] = last;
    }

    /// Turns one face by `n` quarter turns.
    ///
    /// The turn count is taken modulo 4 sign-agnostically, so `-1` and `3`
    /// both mean a counter-clockwise ("prime") quarter turn and any multiple
    /// of 4 is a no-op. All three of the face's cycles advance together.
    pub fn turn(&mut self, face: Face, n: i32) {
        let steps = n.rem_euclid(4);
        for _ in 0..steps {
            for cycle in face.cycles() {
                self.cycle_permute(cycle);
            }
        }
    }

    /// Rotates the whole cube around an axis by `n` quarter turns.
    ///
    /// A rotation is the simultaneous turn of the axis's leading face by `n`
    /// and its opposite face by `-n`, which preserves relative cell adjacency
    /// across faces.
    pub fn rotate(&mut self, axis: Axis, n: i32) {
        let face = axis.leading_face();
        self.turn(face, n);
        self.turn(face.opposite(), -n);
    }
}

impl fmt::Display for Cube {
    /// Renders the cube's net with one `payload|child` entry per facelet.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |i: usize| self.facelets[i].to_string();

        writeln!(f, "Rubik's Cube ID: {}", self.id)?;
        match self.parent {
            Some(parent) => writeln!(f, "Parent Rubik's Cube ID: {parent}")?,
            None => writeln!(
                f,
                "Parent Rubik's Cube ID: current cube is the root and has no parent"
            )?,
        }
        writeln!(f)?;
        writeln!(f, "{:15}{:<7}{:<8}", "", cell(17), cell(18))?;
        writeln!(f, "{:15}{:<7}{:<8}", "", cell(19), cell(20))?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<7}{:<8}{:<7}{:<8}{:<7}{:<8}{:<7}{:<8}",
            cell(21),
            cell(22),
            cell(23),
            cell(0),
            cell(1),
            cell(2),
            cell(3),
            cell(4)
        )?;
        writeln!(
            f,
            "{:<7}{:<8}{:<7}{:<8}{:<7}{:<8}{:<7}{:<8}",
            cell(5),
            cell(6),
            cell(7),
            cell(8),
            cell(9),
            cell(10),
            cell(11),
            cell(12)
        )?;
        writeln!(f)?;
        writeln!(f, "{:15}{:<7}{:<8}", "", cell(13), cell(14))?;
        writeln!(f, "{:15}{:<7}{:<8}", "", cell(15), cell(16))
    }
}

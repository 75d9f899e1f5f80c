//! Rotation geometry table.
//!
//! Locked UVs are derived from corner positions, so the corner order handed to
//! the emitter decides how a face reads once its canonical direction has been
//! remapped by a placement. Each (canonical, rotated) pair picks one of four
//! orderings of the full unit face. Entries were derived per pair for the x/y
//! quarter-turn placements only; they are data, not computed from the matrix.

use cubebake_blocks::Direction;

/// `(left, bottom, right, top)` span handed to `square`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceRect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl FaceRect {
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

/// Corner order relative to the nominal face normal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Winding {
    /// Front-facing along the normal.
    CounterClockwise,
    Clockwise,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum QuadLayout {
    /// (0,0) to (1,1).
    Identity,
    /// (1,1) to (0,0): the identity turned half way round.
    Flipped,
    /// Identity with left and right swapped.
    MirrorU,
    /// Identity with bottom and top swapped.
    MirrorV,
}

impl QuadLayout {
    pub const ALL: [QuadLayout; 4] = [
        QuadLayout::Identity,
        QuadLayout::Flipped,
        QuadLayout::MirrorU,
        QuadLayout::MirrorV,
    ];

    pub const fn rect(self) -> FaceRect {
        match self {
            QuadLayout::Identity => FaceRect::new(0.0, 0.0, 1.0, 1.0),
            QuadLayout::Flipped => FaceRect::new(1.0, 1.0, 0.0, 0.0),
            QuadLayout::MirrorU => FaceRect::new(1.0, 0.0, 0.0, 1.0),
            QuadLayout::MirrorV => FaceRect::new(0.0, 1.0, 1.0, 0.0),
        }
    }

    /// Swapping one axis reflects the quad and reverses its winding; swapping
    /// both is a half turn and keeps it.
    pub const fn winding(self) -> Winding {
        match self {
            QuadLayout::Identity | QuadLayout::Flipped => Winding::CounterClockwise,
            QuadLayout::MirrorU | QuadLayout::MirrorV => Winding::Clockwise,
        }
    }
}

use QuadLayout::{Flipped as F, Identity as I, MirrorU as U, MirrorV as V};

// Rows: canonical direction; columns: rotated direction. Both in ordinal
// order down, up, north, south, west, east.
const GEOMETRY: [[QuadLayout; 6]; 6] = [
    // down
    [I, F, I, F, V, U],
    // up
    [F, I, I, F, U, V],
    // north
    [F, I, I, F, U, V],
    // south
    [F, I, F, I, V, U],
    // west
    [F, I, I, I, I, F],
    // east
    [F, I, V, U, F, I],
];

/// Layout for the quad of `canonical` once it faces `rotated`.
#[inline]
pub fn geometry(canonical: Direction, rotated: Direction) -> QuadLayout {
    GEOMETRY[canonical.index()][rotated.index()]
}

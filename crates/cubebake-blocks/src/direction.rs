use std::fmt;
use std::str::FromStr;

use cubebake_geom::{IVec3, Vec3};

/// One of the six faces of a unit cube.
///
/// Discriminants are the ordinal positions used by the texture slot policy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Direction {
    /// All directions in ordinal order. Baking walks faces in this order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the `[0..6)` ordinal of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Direction::ALL.get(i).copied()
    }

    /// Integer unit vector pointing out of this face.
    #[inline]
    pub fn vector(self) -> IVec3 {
        match self {
            Direction::Down => IVec3::new(0, -1, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::North => IVec3::new(0, 0, -1),
            Direction::South => IVec3::new(0, 0, 1),
            Direction::West => IVec3::new(-1, 0, 0),
            Direction::East => IVec3::new(1, 0, 0),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from(self.vector())
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Exact inverse of [`Direction::vector`].
    pub fn from_vector(v: IVec3) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Direction whose vector has the largest dot product with `v`.
    /// Ties go to the earlier ordinal; the zero vector maps to `North`.
    pub fn nearest(v: IVec3) -> Direction {
        if v == IVec3::default() {
            return Direction::North;
        }
        let mut best = Direction::Down;
        let mut best_dot = i32::MIN;
        for d in Direction::ALL {
            let dot = d.vector().dot(v);
            if dot > best_dot {
                best = d;
                best_dot = dot;
            }
        }
        best
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown direction `{s}`"))
    }
}

use std::fmt;

use cubebake_geom::Mat3i;

use crate::direction::Direction;
use crate::error::RotationError;

/// Anything that can tell where a canonical face ends up after placement.
pub trait DirectionRemap {
    fn remap(&self, canonical: Direction) -> Direction;
}

impl DirectionRemap for Mat3i {
    #[inline]
    fn remap(&self, canonical: Direction) -> Direction {
        Direction::nearest(self.transform(canonical.vector()))
    }
}

impl<T: DirectionRemap + ?Sized> DirectionRemap for &T {
    #[inline]
    fn remap(&self, canonical: Direction) -> Direction {
        (**self).remap(canonical)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::R0, Quarter::R90, Quarter::R180, Quarter::R270];

    /// Accepts any multiple of 90, including negative and > 270 values.
    pub fn from_degrees(degrees: i32) -> Result<Quarter, RotationError> {
        if degrees % 90 != 0 {
            return Err(RotationError::NotQuarterTurn(degrees));
        }
        Ok(match (degrees / 90).rem_euclid(4) {
            0 => Quarter::R0,
            1 => Quarter::R90,
            2 => Quarter::R180,
            _ => Quarter::R270,
        })
    }

    #[inline]
    pub fn turns(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn degrees(self) -> i32 {
        self.turns() * 90
    }
}

/// A placement rotation: `x` quarter turns about the X axis, then `y` about Y.
///
/// These sixteen combinations are the only orientations a block state can
/// request; the geometry table is only defined for what they produce.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelRotation {
    pub x: Quarter,
    pub y: Quarter,
}

impl ModelRotation {
    pub const IDENTITY: ModelRotation = ModelRotation {
        x: Quarter::R0,
        y: Quarter::R0,
    };

    #[inline]
    pub const fn new(x: Quarter, y: Quarter) -> Self {
        Self { x, y }
    }

    pub fn from_degrees(x: i32, y: i32) -> Result<ModelRotation, RotationError> {
        Ok(ModelRotation::new(
            Quarter::from_degrees(x)?,
            Quarter::from_degrees(y)?,
        ))
    }

    /// All sixteen legal placements, x-major.
    pub fn all() -> impl Iterator<Item = ModelRotation> {
        Quarter::ALL
            .into_iter()
            .flat_map(|x| Quarter::ALL.into_iter().map(move |y| ModelRotation::new(x, y)))
    }

    /// Rotation matrix. Turns are clockwise when viewed down the axis, so the
    /// right-handed angles are negated.
    pub fn matrix(&self) -> Mat3i {
        Mat3i::rotation_y(-self.y.turns()) * Mat3i::rotation_x(-self.x.turns())
    }
}

impl DirectionRemap for ModelRotation {
    #[inline]
    fn remap(&self, canonical: Direction) -> Direction {
        self.matrix().remap(canonical)
    }
}

impl fmt::Display for ModelRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}_y{}", self.x.degrees(), self.y.degrees())
    }
}

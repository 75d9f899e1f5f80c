//! Small geometry types shared by the baking crates (no renderer dependency).
#![forbid(unsafe_code)]

use core::ops::{Add, Mul, Neg, Sub};

/// Float vector used for quad corners and normals.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Component-wise approximate equality.
    #[inline]
    pub fn approx_eq(self, rhs: Vec3, eps: f32) -> bool {
        (self.x - rhs.x).abs() <= eps
            && (self.y - rhs.y).abs() <= eps
            && (self.z - rhs.z).abs() <= eps
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<IVec3> for Vec3 {
    #[inline]
    fn from(v: IVec3) -> Self {
        Vec3::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

/// Integer vector. Axis-aligned unit directions are exact in this form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IVec3 {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: IVec3) -> i32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Neg for IVec3 {
    type Output = IVec3;
    #[inline]
    fn neg(self) -> IVec3 {
        IVec3::new(-self.x, -self.y, -self.z)
    }
}

/// Row-major 3x3 integer matrix.
///
/// Quarter-turn rotations have entries in `{-1, 0, 1}`, so composing them stays
/// exact where a float matrix would accumulate `cos(90°)` error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mat3i {
    pub rows: [[i32; 3]; 3],
}

impl Mat3i {
    pub const IDENTITY: Mat3i = Mat3i {
        rows: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    #[inline]
    pub const fn from_rows(rows: [[i32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Right-handed rotation about +X by `quarters` quarter turns (negative turns allowed).
    pub fn rotation_x(quarters: i32) -> Mat3i {
        let (c, s) = quarter_cos_sin(quarters);
        Mat3i::from_rows([[1, 0, 0], [0, c, -s], [0, s, c]])
    }

    /// Right-handed rotation about +Y by `quarters` quarter turns (negative turns allowed).
    pub fn rotation_y(quarters: i32) -> Mat3i {
        let (c, s) = quarter_cos_sin(quarters);
        Mat3i::from_rows([[c, 0, s], [0, 1, 0], [-s, 0, c]])
    }

    /// Right-handed rotation about +Z by `quarters` quarter turns (negative turns allowed).
    pub fn rotation_z(quarters: i32) -> Mat3i {
        let (c, s) = quarter_cos_sin(quarters);
        Mat3i::from_rows([[c, -s, 0], [s, c, 0], [0, 0, 1]])
    }

    #[inline]
    pub fn transform(&self, v: IVec3) -> IVec3 {
        let r = &self.rows;
        IVec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }

    pub fn transpose(&self) -> Mat3i {
        let r = &self.rows;
        Mat3i::from_rows([
            [r[0][0], r[1][0], r[2][0]],
            [r[0][1], r[1][1], r[2][1]],
            [r[0][2], r[1][2], r[2][2]],
        ])
    }

    pub fn determinant(&self) -> i32 {
        let r = &self.rows;
        r[0][0] * (r[1][1] * r[2][2] - r[1][2] * r[2][1])
            - r[0][1] * (r[1][0] * r[2][2] - r[1][2] * r[2][0])
            + r[0][2] * (r[1][0] * r[2][1] - r[1][1] * r[2][0])
    }
}

impl Default for Mat3i {
    fn default() -> Self {
        Mat3i::IDENTITY
    }
}

impl Mul for Mat3i {
    type Output = Mat3i;
    fn mul(self, rhs: Mat3i) -> Mat3i {
        let mut out = [[0i32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Mat3i::from_rows(out)
    }
}

#[inline]
fn quarter_cos_sin(quarters: i32) -> (i32, i32) {
    match quarters.rem_euclid(4) {
        0 => (1, 0),
        1 => (0, 1),
        2 => (-1, 0),
        _ => (0, -1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rotation_inverse_is_transpose(
            q in 0i32..4,
            x in -64i32..64,
            y in -64i32..64,
            z in -64i32..64,
        ) {
            let v = IVec3::new(x, y, z);
            for m in [Mat3i::rotation_x(q), Mat3i::rotation_y(q), Mat3i::rotation_z(q)] {
                prop_assert_eq!(m.transpose().transform(m.transform(v)), v);
            }
        }

        #[test]
        fn vec3_neg_cancels(v: Vec3) {
            prop_assume!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
            prop_assert_eq!(v + (-v), Vec3::ZERO);
        }
    }

    #[test]
    fn full_turn_is_identity() {
        for q in [4, -4, 8] {
            assert_eq!(Mat3i::rotation_x(q), Mat3i::IDENTITY);
            assert_eq!(Mat3i::rotation_y(q), Mat3i::IDENTITY);
            assert_eq!(Mat3i::rotation_z(q), Mat3i::IDENTITY);
        }
    }
}

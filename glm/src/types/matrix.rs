use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

use super::{Vector3, Vector4, EPS};


/// 4x4 matrix stored row-major and addressed as `m[row][column]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    pub m: [[f32; 4]; 4],
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    /// Column vector on the right: `result[i] = sum_j m[i][j] * rhs[j]`.
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        let row = |i: usize| {
            let r = self.m[i];
            r[0] * rhs.x + r[1] * rhs.y + r[2] * rhs.z + r[3] * rhs.w
        };
        Vector4 {
            x: row(0),
            y: row(1),
            z: row(2),
            w: row(3),
        }
    }
}

impl From<f32> for Matrix4 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::diagonal(value)
    }
}

impl Matrix4 {
    #[inline]
    pub fn zero() -> Self {
        Self::zeroed()
    }

    #[inline]
    pub fn diagonal(value: f32) -> Self {
        let mut m = Self::zeroed();
        for i in 0..4 {
            m.m[i][i] = value;
        }
        m
    }

    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(1.0)
    }

    /// First three entries of row `index`; the fourth column is dropped.
    #[inline]
    pub fn row(self, index: usize) -> Vector3 {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        let r = self.m[index];
        Vector3::new(r[0], r[1], r[2])
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(rhs.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() < EPS)
    }
}

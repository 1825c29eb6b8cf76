use std::ops::Sub;

use crate::types::{Vector2, Vector3};

/// Euclidean metric for the vector types that define one.
pub trait Metric: Copy + Sub<Output = Self> {
    fn sum_of_squares(self) -> f32;
}

impl Metric for Vector2 {
    #[inline]
    fn sum_of_squares(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

impl Metric for Vector3 {
    #[inline]
    fn sum_of_squares(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

#[inline]
pub fn length<V: Metric>(v: V) -> f32 {
    v.sum_of_squares().sqrt()
}

#[inline]
pub fn distance<V: Metric>(a: V, b: V) -> f32 {
    length(a - b)
}

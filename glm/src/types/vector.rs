use super::EPS;
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Mul, Sub};

#[cfg(test)]
mod test_vector_2 {
    use super::Vector2;

    #[test]
    fn add_zero() {
        let v = Vector2::new(1.5, -2.25);
        assert_eq!(v + Vector2::zero(), v);
        assert_eq!(Vector2::default(), Vector2::zero());
    }

    #[test]
    fn sub() {
        let a = Vector2::new(3.0, 1.0);
        let b = Vector2::new(1.0, 4.0);
        assert_eq!(a - b, Vector2::new(2.0, -3.0));
        assert_eq!(b - a, Vector2::new(-2.0, 3.0));
    }

    #[test]
    fn scale() {
        let a = Vector2::new(1.0, -2.0);
        let b = Vector2::new(0.5, 3.0);
        assert_eq!(a * 2.0, Vector2::new(2.0, -4.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert!(((a + b) * 1.5).approx_equal(a * 1.5 + b * 1.5));
    }

    #[test]
    fn dot() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}

impl Vector2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        (self.x - rhs.x).abs() < EPS && (self.y - rhs.y).abs() < EPS
    }
}


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl Vector3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Euclidean norm, `sqrt(self.dot(self))`.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        (self.x - rhs.x).abs() < EPS && (self.y - rhs.y).abs() < EPS && (self.z - rhs.z).abs() < EPS
    }
}

#[cfg(test)]
mod test_vector_4 {
    use super::Vector4;

    #[test]
    fn add_sub() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector4::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Vector4::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a + Vector4::zero(), a);
    }

    #[test]
    fn scale() {
        let a = Vector4::new(1.0, -2.0, 3.0, -4.0);
        let b = Vector4::new(0.25, 1.5, -0.7, 2.2);
        assert_eq!(a * -1.0, Vector4::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(0.5 * a, a * 0.5);
        assert!(((a + b) * 2.5).approx_equal(a * 2.5 + b * 2.5));
    }

    #[test]
    fn layout() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytemuck::pod_read_unaligned::<Vector4>(bytes), v);
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs * self
    }
}

// No dot product or length here, the w component is left to the caller.
impl Vector4 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        (self.x - rhs.x).abs() < EPS
            && (self.y - rhs.y).abs() < EPS
            && (self.z - rhs.z).abs() < EPS
            && (self.w - rhs.w).abs() < EPS
    }
}

//! 4D Vector type

use serde::{Deserialize, Serialize};

use crate::rotation::{RotationPlane, RotationSense};

/// One of the four coordinate axes of 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    /// The 4th spatial dimension (ana/kata)
    W,
}

/// 4D Vector with x, y, z, w components
/// The w component represents the 4th spatial dimension (ana/kata)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Read a single component
    #[inline]
    pub fn axis(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::W => self.w,
        }
    }

    /// Return a copy with a single component replaced
    #[inline]
    pub fn with_axis(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
            Axis::W => self.w = value,
        }
        self
    }

    /// Rotate by `angle` radians within `plane`
    ///
    /// Only the two components naming the plane change. For a plane (a, b)
    /// with positive sense:
    ///
    /// ```text
    /// a' = a cos θ - b sin θ
    /// b' = a sin θ + b cos θ
    /// ```
    ///
    /// Negative-sense planes flip the sign of every sin term.
    pub fn rotated(self, plane: RotationPlane, angle: f64) -> Self {
        let (a_axis, b_axis) = plane.axes();
        let (sin, cos) = angle.sin_cos();
        let sin = match plane.sense() {
            RotationSense::Positive => sin,
            RotationSense::Negative => -sin,
        };

        let a = self.axis(a_axis);
        let b = self.axis(b_axis);

        self.with_axis(a_axis, a * cos - b * sin)
            .with_axis(b_axis, a * sin + b * cos)
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Mul<f64> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::MulAssign<f64> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v.length() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_axis_access() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.axis(Axis::X), 1.0);
        assert_eq!(v.axis(Axis::Y), 2.0);
        assert_eq!(v.axis(Axis::Z), 3.0);
        assert_eq!(v.axis(Axis::W), 4.0);
        assert_eq!(v.with_axis(Axis::W, 9.0), Vec4::new(1.0, 2.0, 3.0, 9.0));
    }

    #[test]
    fn test_mul_and_neg() {
        let mut v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vec4::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(v * 2.0, Vec4::new(2.0, -4.0, 6.0, -8.0));
        v *= 40.0;
        assert_eq!(v, Vec4::new(40.0, -80.0, 120.0, -160.0));
    }

    #[test]
    fn test_rotate_xy_quarter_turn() {
        let v = Vec4::new(1.0, 0.0, 5.0, 7.0);
        let r = v.rotated(RotationPlane::XY, FRAC_PI_2);
        assert!(approx_eq(r, Vec4::new(0.0, 1.0, 5.0, 7.0)));
    }

    #[test]
    fn test_rotate_xz_is_negative_sense() {
        // x' = x cos + z sin, z' = -x sin + z cos
        let v = Vec4::new(1.0, 3.0, 0.0, 4.0);
        let r = v.rotated(RotationPlane::XZ, FRAC_PI_2);
        assert!(approx_eq(r, Vec4::new(0.0, 3.0, -1.0, 4.0)));
    }

    #[test]
    fn test_rotate_matches_explicit_formulas() {
        let v = Vec4::new(1.5, -2.0, 3.25, -0.75);
        let t = 0.3_f64;
        let (s, c) = (t.sin(), t.cos());

        let yz = Vec4::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c, v.w);
        let xz = Vec4::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c, v.w);
        let xy = Vec4::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z, v.w);
        let xw = Vec4::new(v.x * c + v.w * s, v.y, v.z, v.x * -s + v.w * c);
        let yw = Vec4::new(v.x, v.y * c - v.w * s, v.z, v.y * s + v.w * c);
        let zw = Vec4::new(v.x, v.y, v.z * c - v.w * s, v.z * s + v.w * c);

        assert_eq!(v.rotated(RotationPlane::YZ, t), yz);
        assert_eq!(v.rotated(RotationPlane::XZ, t), xz);
        assert_eq!(v.rotated(RotationPlane::XY, t), xy);
        assert_eq!(v.rotated(RotationPlane::XW, t), xw);
        assert_eq!(v.rotated(RotationPlane::YW, t), yw);
        assert_eq!(v.rotated(RotationPlane::ZW, t), zw);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        for plane in RotationPlane::ALL {
            assert!(approx_eq(v.rotated(plane, 2.0 * PI), v), "{:?}", plane);
        }
    }
}

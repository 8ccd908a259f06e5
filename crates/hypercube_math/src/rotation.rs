//! Rotation planes of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Each plane carries its own sign convention ([`RotationSense`]). The
//! conventions are not uniformly one handedness: XZ and XW turn the opposite
//! way to the other four for the same angle.

use serde::{Deserialize, Serialize};

use crate::vec4::Axis;

/// Direction of a plane rotation for positive angles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationSense {
    /// a' = a cos θ - b sin θ, b' = a sin θ + b cos θ
    Positive,
    /// a' = a cos θ + b sin θ, b' = -a sin θ + b cos θ
    Negative,
}

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// YZ plane - roll (rotation around X axis in 3D)
    YZ,
    /// XZ plane - yaw (rotation around Y axis in 3D)
    XZ,
    /// XY plane - rotation around Z axis in 3D
    XY,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::YZ,
        RotationPlane::XZ,
        RotationPlane::XY,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// The two axes spanning this plane, in (a, b) order
    pub fn axes(self) -> (Axis, Axis) {
        match self {
            RotationPlane::YZ => (Axis::Y, Axis::Z),
            RotationPlane::XZ => (Axis::X, Axis::Z),
            RotationPlane::XY => (Axis::X, Axis::Y),
            RotationPlane::XW => (Axis::X, Axis::W),
            RotationPlane::YW => (Axis::Y, Axis::W),
            RotationPlane::ZW => (Axis::Z, Axis::W),
        }
    }

    /// Sign convention applied by [`crate::Vec4::rotated`]
    pub fn sense(self) -> RotationSense {
        match self {
            RotationPlane::XZ | RotationPlane::XW => RotationSense::Negative,
            RotationPlane::YZ | RotationPlane::XY | RotationPlane::YW | RotationPlane::ZW => {
                RotationSense::Positive
            }
        }
    }

    /// Short lowercase name ("xz", "yw", ...)
    pub fn name(self) -> &'static str {
        match self {
            RotationPlane::YZ => "yz",
            RotationPlane::XZ => "xz",
            RotationPlane::XY => "xy",
            RotationPlane::XW => "xw",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A rotation by `angle` radians in a single plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    pub plane: RotationPlane,
    pub angle: f64,
}

impl PlaneRotation {
    #[inline]
    pub const fn new(plane: RotationPlane, angle: f64) -> Self {
        Self { plane, angle }
    }

    /// The same plane turned the other way
    #[inline]
    pub fn inverse(self) -> Self {
        Self::new(self.plane, -self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_planes_distinct() {
        let axes: HashSet<_> = RotationPlane::ALL.iter().map(|p| p.axes()).collect();
        assert_eq!(axes.len(), 6);
        for plane in RotationPlane::ALL {
            let (a, b) = plane.axes();
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_negative_sense_planes() {
        assert_eq!(RotationPlane::XZ.sense(), RotationSense::Negative);
        assert_eq!(RotationPlane::XW.sense(), RotationSense::Negative);
        for plane in [RotationPlane::YZ, RotationPlane::XY, RotationPlane::YW, RotationPlane::ZW] {
            assert_eq!(plane.sense(), RotationSense::Positive, "{}", plane);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(RotationPlane::XZ.to_string(), "xz");
        assert_eq!(RotationPlane::YW.to_string(), "yw");
    }

    #[test]
    fn test_inverse() {
        let r = PlaneRotation::new(RotationPlane::ZW, 0.25);
        assert_eq!(r.inverse(), PlaneRotation::new(RotationPlane::ZW, -0.25));
    }
}

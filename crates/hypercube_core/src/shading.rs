//! Depth-based shading
//!
//! Gray level depends on the z coordinate alone (not w, not projected
//! depth), so the lighting stays fixed under rotations that involve w.

use hypercube_math::Vec4;

/// Offset added to z before clamping into a gray level
pub const DEPTH_OFFSET: f64 = 80.0;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::gray(0);
    pub const WHITE: Self = Self::gray(255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Equal red, green and blue
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Normalized RGBA with full opacity
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

/// Gray level for a depth value: `clamp(trunc(depth + 80), 0, 255)`
pub fn depth_intensity(depth: f64) -> u8 {
    (depth + DEPTH_OFFSET).trunc().clamp(0.0, 255.0) as u8
}

/// Gray level for a single vertex
#[inline]
pub fn vertex_intensity(vertex: Vec4) -> u8 {
    depth_intensity(vertex.z)
}

/// Gray level for an edge, taken from the endpoint with the smaller z
#[inline]
pub fn edge_intensity(a: Vec4, b: Vec4) -> u8 {
    depth_intensity(a.z.min(b.z))
}

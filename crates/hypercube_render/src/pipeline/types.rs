//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A colored vertex in window pixel coordinates (origin top-left, y down)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in logical pixels
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms mapping pixel coordinates to clip space
/// Layout: 16 bytes (must match shapes.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Logical window size in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}

impl ScreenUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            _padding: [0.0; 2],
        }
    }

    /// Same mapping as `vs_main`: pixels to normalized device coordinates
    pub fn to_ndc(&self, position: [f32; 2]) -> [f32; 2] {
        [
            position[0] / self.size[0] * 2.0 - 1.0,
            1.0 - position[1] / self.size[1] * 2.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex2D>(), 4);
        assert_eq!(std::mem::align_of::<ScreenUniforms>(), 4);
    }

    #[test]
    fn test_to_ndc_corners() {
        let screen = ScreenUniforms::new(800.0, 800.0);
        assert_eq!(screen.to_ndc([0.0, 0.0]), [-1.0, 1.0]);
        assert_eq!(screen.to_ndc([800.0, 800.0]), [1.0, -1.0]);
        assert_eq!(screen.to_ndc([400.0, 400.0]), [0.0, 0.0]);
    }
}

//! CPU-side tessellation of canvas draw calls
//!
//! [`ShapeBatch`] turns each line into a quad and each point into a
//! triangle fan, producing a flat triangle list for the shape pipeline.

use std::f64::consts::TAU;

use hypercube_core::{Canvas, Color, Vec2};

use crate::pipeline::Vertex2D;

/// Default number of triangles per point disc
pub const DEFAULT_POINT_SEGMENTS: u32 = 24;

/// One frame's worth of tessellated shapes
#[derive(Clone, Debug)]
pub struct ShapeBatch {
    clear_color: Color,
    vertices: Vec<Vertex2D>,
    point_segments: u32,
}

impl Default for ShapeBatch {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_SEGMENTS)
    }
}

impl ShapeBatch {
    /// Create an empty batch; discs use `point_segments` triangles (at least 3)
    pub fn new(point_segments: u32) -> Self {
        Self {
            clear_color: Color::BLACK,
            vertices: Vec::new(),
            point_segments: point_segments.max(3),
        }
    }

    /// Color the frame is cleared to before drawing
    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// The clear color as a wgpu color
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color.to_rgba_f32();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    /// Triangle-list vertices in draw order
    #[inline]
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    #[inline]
    pub fn point_segments(&self) -> u32 {
        self.point_segments
    }

    fn push_triangle(&mut self, color: [f32; 4], a: Vec2, b: Vec2, c: Vec2) {
        self.vertices.push(Vertex2D::new(a.to_array_f32(), color));
        self.vertices.push(Vertex2D::new(b.to_array_f32(), color));
        self.vertices.push(Vertex2D::new(c.to_array_f32(), color));
    }
}

impl Canvas for ShapeBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn draw_line(&mut self, color: Color, from: Vec2, to: Vec2, width: u32) {
        let direction = to - from;
        let length = direction.length();
        if length == 0.0 || width == 0 {
            return;
        }

        let offset = direction.perp() * (width as f64 / 2.0 / length);
        let rgba = color.to_rgba_f32();

        let a = from + offset;
        let b = from - offset;
        let c = to - offset;
        let d = to + offset;

        self.push_triangle(rgba, a, b, c);
        self.push_triangle(rgba, a, c, d);
    }

    fn draw_point(&mut self, color: Color, center: Vec2, radius: u32) {
        if radius == 0 {
            return;
        }

        let rgba = color.to_rgba_f32();
        let radius = radius as f64;
        let segments = self.point_segments;
        let rim = |i: u32| {
            let angle = TAU * i as f64 / segments as f64;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        };

        for i in 0..segments {
            self.push_triangle(rgba, center, rim(i), rim(i + 1));
        }
    }
}

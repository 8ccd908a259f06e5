//! The rotating hypercube model
//!
//! Vertices are the only mutable state. Edges are snapshots of vertex
//! positions taken by [`Hypercube::rebuild_edges`], which every mutating
//! operation calls as its last step.

use hypercube_math::{PlaneRotation, RotationPlane, Vec2, Vec4};

use crate::canvas::{Canvas, DrawStyle};
use crate::projection::Projection;
use crate::shading::{self, Color};
use crate::topology::{CORNER_SIGNS, EDGE_COUNT, EDGE_PAIRS, VERTEX_COUNT};

/// Default half side length of the tesseract
pub const DEFAULT_SCALE: f64 = 40.0;

/// Default screen anchor (center of an 800x800 window)
pub const DEFAULT_ORIGIN: Vec2 = Vec2::new(400.0, 400.0);

/// Copies of two adjacent vertex positions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edge {
    pub a: Vec4,
    pub b: Vec4,
}

impl Edge {
    #[inline]
    pub fn new(a: Vec4, b: Vec4) -> Self {
        Self { a, b }
    }

    /// Depth shade from the endpoint with the smaller z
    #[inline]
    pub fn intensity(&self) -> u8 {
        shading::edge_intensity(self.a, self.b)
    }
}

/// A tesseract anchored at a screen-space origin
#[derive(Clone, Debug)]
pub struct Hypercube {
    vertices: [Vec4; VERTEX_COUNT],
    edges: [Edge; EDGE_COUNT],
    scale: f64,
    origin: Vec2,
    projection: Projection,
}

impl Default for Hypercube {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN)
    }
}

impl Hypercube {
    /// Create a hypercube with the default scale
    pub fn new(origin: Vec2) -> Self {
        Self::with_scale(origin, DEFAULT_SCALE)
    }

    /// Create a hypercube whose corners sit at ±`scale` on every axis
    pub fn with_scale(origin: Vec2, scale: f64) -> Self {
        let vertices = CORNER_SIGNS.map(|[x, y, z, w]| Vec4::new(x, y, z, w) * scale);

        let mut hypercube = Self {
            vertices,
            edges: [Edge::default(); EDGE_COUNT],
            scale,
            origin,
            projection: Projection::default(),
        };
        hypercube.rebuild_edges();

        log::debug!(
            "Built hypercube: {} vertices, {} edges, scale {}, origin ({}, {})",
            VERTEX_COUNT,
            EDGE_COUNT,
            scale,
            origin.x,
            origin.y
        );

        hypercube
    }

    /// Replace the projection settings
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        &self.edges
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Move the screen anchor. Vertices and edges are untouched.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Re-snapshot every edge from the current vertex positions
    pub fn rebuild_edges(&mut self) {
        for (edge, &(a, b)) in self.edges.iter_mut().zip(EDGE_PAIRS.iter()) {
            *edge = Edge::new(self.vertices[a], self.vertices[b]);
        }
    }

    /// Rotate every vertex by `angle` radians in `plane`, then rebuild edges
    pub fn rotate(&mut self, plane: RotationPlane, angle: f64) {
        for vertex in self.vertices.iter_mut() {
            *vertex = vertex.rotated(plane, angle);
        }
        self.rebuild_edges();
    }

    /// Apply a single plane rotation
    #[inline]
    pub fn apply(&mut self, rotation: PlaneRotation) {
        self.rotate(rotation.plane, rotation.angle);
    }

    /// Apply rotations in the given order
    pub fn rotate_all(&mut self, rotations: &[PlaneRotation]) {
        for &rotation in rotations {
            self.apply(rotation);
        }
    }

    /// Screen position of a 4D point under this hypercube's projection
    #[inline]
    pub fn project(&self, point: Vec4) -> Vec2 {
        self.projection.project(point, self.origin)
    }

    /// Draw vertices as shaded discs, then edges as shaded lines
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, style: &DrawStyle) {
        for &vertex in &self.vertices {
            let color = Color::gray(shading::vertex_intensity(vertex));
            canvas.draw_point(color, self.project(vertex), style.point_radius);
        }

        for edge in &self.edges {
            let color = Color::gray(edge.intensity());
            canvas.draw_line(
                color,
                self.project(edge.a),
                self.project(edge.b),
                style.line_width,
            );
        }
    }
}

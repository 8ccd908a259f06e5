//! Core types for the hypercube viewer
//!
//! This crate holds the geometric model and everything needed to turn it into
//! draw calls, without depending on any windowing or GPU library:
//!
//! - [`Hypercube`] - 16 vertices, 32 snapshotted edges, scale and screen origin
//! - [`Edge`] - Copies of two adjacent vertex positions
//! - [`Projection`] - Doubled weak-perspective projection from 4D to 2D
//! - [`shading`] - Depth-based gray levels for edges and vertices
//! - [`Canvas`] - The drawing surface the renderer provides
//! - [`RecordingCanvas`] - A canvas that records draw commands

mod hypercube;
mod projection;
pub mod topology;
pub mod shading;
pub mod canvas;

pub use hypercube::{Edge, Hypercube, DEFAULT_ORIGIN, DEFAULT_SCALE};
pub use projection::Projection;
pub use shading::Color;
pub use canvas::{Canvas, DrawCommand, DrawStyle, RecordingCanvas};

// Re-export commonly used types from hypercube_math for convenience
pub use hypercube_math::{Axis, PlaneRotation, RotationPlane, RotationSense, Vec2, Vec4};

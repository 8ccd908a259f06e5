//! Rendering pipeline components
//!
//! A single render pipeline draws colored triangles given in window pixel
//! coordinates. Lines and points reach it already tessellated.

pub mod types;
pub mod shape_pipeline;

pub use types::{ScreenUniforms, Vertex2D};
pub use shape_pipeline::ShapePipeline;

//! wgpu rendering for the hypercube viewer
//!
//! This crate implements the drawing surface the core model draws onto.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`batch::ShapeBatch`] - A [`Canvas`] that tessellates lines and points into triangles
//! - [`pipeline::ShapePipeline`] - Render pipeline drawing a batch in screen space

pub mod context;
pub mod batch;
pub mod pipeline;

// Re-export core types for convenience
pub use hypercube_core::{Canvas, Color, DrawStyle, Vec2};

pub use batch::ShapeBatch;
pub use context::{ContextError, RenderContext};

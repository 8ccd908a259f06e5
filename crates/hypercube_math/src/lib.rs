//! 4D Mathematics Library
//!
//! This crate provides the vector and rotation primitives used by the
//! hypercube model.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec2`] - 2D screen-space point
//! - [`Axis`] - One of the four coordinate axes
//! - [`RotationPlane`] - One of the six coordinate planes of 4D space
//! - [`PlaneRotation`] - A plane paired with an angle

mod vec2;
mod vec4;
pub mod rotation;

pub use vec2::Vec2;
pub use vec4::{Axis, Vec4};
pub use rotation::{PlaneRotation, RotationPlane, RotationSense};

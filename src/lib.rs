//! Hypercube viewer
//!
//! Application layer around the hypercube model: configuration, input
//! mapping and the window/render/simulation systems driven by `main`.

pub mod config;
pub mod input;
pub mod systems;

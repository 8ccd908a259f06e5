//! Input handling module
//!
//! Maps raw window events to semantic actions. Quitting is the only action.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};

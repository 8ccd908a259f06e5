//! Drawing surface abstraction
//!
//! The hypercube only knows how to describe itself as points and lines on a
//! [`Canvas`]. The GPU renderer implements the trait by tessellating the
//! shapes; [`RecordingCanvas`] just stores the calls.

use hypercube_math::Vec2;

use crate::shading::Color;

/// A 2D surface accepting clear, line and point draw calls
pub trait Canvas {
    /// Fill the whole surface with `color`, discarding earlier draws
    fn clear(&mut self, color: Color);

    /// Draw a line segment `width` pixels wide
    fn draw_line(&mut self, color: Color, from: Vec2, to: Vec2, width: u32);

    /// Draw a filled disc of the given radius
    fn draw_point(&mut self, color: Color, center: Vec2, radius: u32);
}

/// Sizes and colors used when drawing a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    /// Per-frame clear color
    pub background: Color,
    /// Edge thickness in pixels
    pub line_width: u32,
    /// Vertex disc radius in pixels
    pub point_radius: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            line_width: 3,
            point_radius: 10,
        }
    }
}

/// A single recorded draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { color: Color, from: Vec2, to: Vec2, width: u32 },
    Point { color: Color, center: Vec2, radius: u32 },
}

/// Canvas that keeps every call in order
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded line commands
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Recorded point commands
    pub fn points(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Point { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, color: Color, from: Vec2, to: Vec2, width: u32) {
        self.commands.push(DrawCommand::Line { color, from, to, width });
    }

    fn draw_point(&mut self, color: Color, center: Vec2, radius: u32) {
        self.commands.push(DrawCommand::Point { color, center, radius });
    }
}

//! Hypercube simulation system
//!
//! Owns the hypercube and advances it by a fixed set of plane rotations per
//! tick. Ticks are frame-locked: one per presented frame, with no delta time.

use hypercube_core::{Canvas, DrawStyle, Hypercube, PlaneRotation};

use crate::config::AppConfig;

/// Manages the rotating hypercube
pub struct SimulationSystem {
    hypercube: Hypercube,
    rotations: Vec<PlaneRotation>,
    ticks: u64,
}

impl SimulationSystem {
    /// Create a simulation applying `rotations` in order on every tick
    pub fn new(hypercube: Hypercube, rotations: Vec<PlaneRotation>) -> Self {
        Self {
            hypercube,
            rotations,
            ticks: 0,
        }
    }

    /// Build the hypercube and per-tick rotations from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let hypercube = Hypercube::with_scale(config.hypercube.origin(), config.hypercube.scale)
            .with_projection(config.projection.to_projection());
        let rotations = config.animation.rotations();

        log::info!(
            "Rotating in planes [{}] by {:.6} rad per tick",
            config
                .animation
                .planes
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", "),
            config.animation.angle_step
        );

        Self::new(hypercube, rotations)
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.hypercube.rotate_all(&self.rotations);
        self.ticks += 1;
    }

    /// Clear `canvas` to the background and draw the current state
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, style: &DrawStyle) {
        canvas.clear(style.background);
        self.hypercube.draw(canvas, style);
    }

    pub fn hypercube(&self) -> &Hypercube {
        &self.hypercube
    }

    pub fn rotations(&self) -> &[PlaneRotation] {
        &self.rotations
    }

    /// Ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_core::{DrawCommand, RecordingCanvas, RotationPlane};

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.rotations().len(), 2);
        assert_eq!(sim.rotations()[0].plane, RotationPlane::XZ);
        assert_eq!(sim.rotations()[1].plane, RotationPlane::YW);
    }

    #[test]
    fn test_tick_matches_manual_rotation() {
        let mut sim = SimulationSystem::default();
        sim.tick();
        sim.tick();

        let step = std::f64::consts::PI / 3000.0;
        let mut expected = Hypercube::default();
        for _ in 0..2 {
            expected.rotate(RotationPlane::XZ, step);
            expected.rotate(RotationPlane::YW, step);
        }

        assert_eq!(sim.ticks(), 2);
        assert_eq!(sim.hypercube().vertices(), expected.vertices());
        assert_eq!(sim.hypercube().edges(), expected.edges());
    }

    #[test]
    fn test_draw_clears_first() {
        let sim = SimulationSystem::default();
        let mut canvas = RecordingCanvas::new();
        canvas.draw_point(hypercube_core::Color::BLACK, hypercube_core::Vec2::ZERO, 1);

        let style = DrawStyle::default();
        sim.draw(&mut canvas, &style);

        assert_eq!(canvas.commands[0], DrawCommand::Clear(style.background));
        assert_eq!(canvas.commands.len(), 1 + 16 + 32);
    }

    #[test]
    fn test_custom_rotations() {
        let mut sim = SimulationSystem::new(
            Hypercube::default(),
            vec![PlaneRotation::new(RotationPlane::ZW, 0.5)],
        );
        sim.tick();

        let mut expected = Hypercube::default();
        expected.rotate(RotationPlane::ZW, 0.5);
        assert_eq!(sim.hypercube().vertices(), expected.vertices());
    }
}

//! Projection from 4D model space to 2D screen space
//!
//! z and w are both treated as depth axes. Each yields a weak-perspective
//! scale factor, and the two factors are multiplied into a single step
//! rather than producing an intermediate 3D point.

use hypercube_math::{Vec2, Vec4};

/// Doubled weak-perspective projection settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Assumed distance of the viewer along each depth axis
    pub viewer_distance: f64,
    /// Divisor normalizing a depth offset into a scale factor
    pub depth_normalization: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            viewer_distance: Self::DEFAULT_VIEWER_DISTANCE,
            depth_normalization: Self::DEFAULT_DEPTH_NORMALIZATION,
        }
    }
}

impl Projection {
    pub const DEFAULT_VIEWER_DISTANCE: f64 = 100.0;
    pub const DEFAULT_DEPTH_NORMALIZATION: f64 = 50.0;

    pub fn new(viewer_distance: f64, depth_normalization: f64) -> Self {
        Self {
            viewer_distance,
            depth_normalization,
        }
    }

    /// Scale factor for a coordinate along one depth axis
    ///
    /// Grows linearly as `depth` decreases and reaches zero at the viewer.
    #[inline]
    pub fn depth_factor(&self, depth: f64) -> f64 {
        -(depth - self.viewer_distance) / self.depth_normalization
    }

    /// Project a 4D point onto the screen, anchored at `origin`
    pub fn project(&self, point: Vec4, origin: Vec2) -> Vec2 {
        let fz = self.depth_factor(point.z);
        let fw = self.depth_factor(point.w);

        Vec2::new(
            point.x * fz * fw / 2.0 + origin.x,
            point.y * fz * fw / 2.0 + origin.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_default_constants() {
        let p = Projection::default();
        assert_eq!(p.viewer_distance, 100.0);
        assert_eq!(p.depth_normalization, 50.0);
    }

    #[test]
    fn test_depth_factor() {
        let p = Projection::default();
        assert!((p.depth_factor(40.0) - 1.2).abs() < EPSILON);
        assert!((p.depth_factor(-40.0) - 2.8).abs() < EPSILON);
        assert_eq!(p.depth_factor(100.0), 0.0);
    }

    #[test]
    fn test_project_corner() {
        let p = Projection::default();
        let screen = p.project(Vec4::new(40.0, 40.0, 40.0, 40.0), Vec2::ZERO);
        assert!((screen.x - 28.8).abs() < EPSILON);
        assert!((screen.y - 28.8).abs() < EPSILON);
    }

    #[test]
    fn test_project_is_anchored_at_origin() {
        let p = Projection::default();
        let origin = Vec2::new(400.0, 400.0);
        let screen = p.project(Vec4::new(0.0, 0.0, 13.0, -27.0), origin);
        assert_eq!(screen, origin);
    }

    #[test]
    fn test_lower_w_scales_up() {
        let p = Projection::default();
        let near = p.project(Vec4::new(10.0, 0.0, 0.0, 40.0), Vec2::ZERO);
        let far = p.project(Vec4::new(10.0, 0.0, 0.0, -40.0), Vec2::ZERO);
        assert!(far.x > near.x);
    }

    #[test]
    fn test_matches_combined_formula_exactly() {
        let p = Projection::default();
        let v = Vec4::new(12.5, -31.0, 7.25, -18.0);
        let origin = Vec2::new(400.0, 400.0);
        let fz = -(v.z - 100.0) / 50.0;
        let fw = -(v.w - 100.0) / 50.0;
        let expected = Vec2::new(v.x * fz * fw / 2.0 + 400.0, v.y * fz * fw / 2.0 + 400.0);
        assert_eq!(p.project(v, origin), expected);
    }
}

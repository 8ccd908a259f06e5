//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HYPERCUBE_SECTION__KEY`)
//!
//! Every value has a built-in default, so a missing file changes nothing.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hypercube_core::{Color, DrawStyle, PlaneRotation, Projection, RotationPlane, Vec2};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Hypercube geometry
    #[serde(default)]
    pub hypercube: HypercubeConfig,
    /// Projection constants
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Per-tick rotation
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HYPERCUBE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            log::debug!("Loading {}", default_path.display());
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            log::debug!("Loading {}", user_path.display());
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HYPERCUBE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HYPERCUBE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hypercube".to_string(),
            width: 800,
            height: 800,
            vsync: true,
        }
    }
}

/// Hypercube geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HypercubeConfig {
    /// Half side length
    pub scale: f64,
    /// Screen anchor [x, y] in pixels
    pub origin: [f64; 2],
}

impl Default for HypercubeConfig {
    fn default() -> Self {
        Self {
            scale: hypercube_core::DEFAULT_SCALE,
            origin: [
                hypercube_core::DEFAULT_ORIGIN.x,
                hypercube_core::DEFAULT_ORIGIN.y,
            ],
        }
    }
}

impl HypercubeConfig {
    pub fn origin(&self) -> Vec2 {
        Vec2::from(self.origin)
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Viewer distance along z and w
    pub viewer_distance: f64,
    /// Depth normalization divisor
    pub depth_normalization: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            viewer_distance: Projection::DEFAULT_VIEWER_DISTANCE,
            depth_normalization: Projection::DEFAULT_DEPTH_NORMALIZATION,
        }
    }
}

impl ProjectionConfig {
    pub fn to_projection(&self) -> Projection {
        Projection::new(self.viewer_distance, self.depth_normalization)
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Angle applied per tick in each plane, in radians
    pub angle_step: f64,
    /// Planes rotated every tick, in order
    pub planes: Vec<RotationPlane>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angle_step: std::f64::consts::PI / 3000.0,
            planes: vec![RotationPlane::XZ, RotationPlane::YW],
        }
    }
}

impl AnimationConfig {
    /// The rotations applied on each tick, in order
    pub fn rotations(&self) -> Vec<PlaneRotation> {
        self.planes
            .iter()
            .map(|&plane| PlaneRotation::new(plane, self.angle_step))
            .collect()
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Per-frame clear color [r, g, b]
    pub background_color: [u8; 3],
    /// Color the surface is filled with once at startup [r, g, b]
    pub initial_color: [u8; 3],
    /// Edge thickness in pixels
    pub line_width: u32,
    /// Vertex disc radius in pixels
    pub point_radius: u32,
    /// Triangles per vertex disc
    pub point_segments: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [255, 255, 255],
            initial_color: [0, 0, 0],
            line_width: 3,
            point_radius: 10,
            point_segments: 24,
        }
    }
}

impl RenderingConfig {
    pub fn draw_style(&self) -> DrawStyle {
        DrawStyle {
            background: Color::from(self.background_color),
            line_width: self.line_width,
            point_radius: self.point_radius,
        }
    }

    pub fn initial_color(&self) -> Color {
        Color::from(self.initial_color)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl DebugConfig {
    /// Parsed level filter, `Info` when the string is not a level name
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

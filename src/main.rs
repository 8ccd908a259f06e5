//! Hypercube - rotating tesseract viewer
//!
//! Draws a tesseract rotating in the XZ and YW planes, projected to 2D
//! through a doubled weak-perspective projection.

use std::process::ExitCode;

use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use hypercube::config::AppConfig;
use hypercube::input::{InputAction, InputMapper};
use hypercube::systems::{RenderError, RenderSystem, SimulationSystem, WindowError, WindowSystem};
use hypercube_core::DrawStyle;
use hypercube_render::ShapeBatch;

/// Unrecoverable application failure
#[derive(Debug)]
enum AppError {
    Window(WindowError),
    Render(RenderError),
    EventLoop(EventLoopError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Window(err) => write!(f, "{}", err),
            AppError::Render(err) => write!(f, "{}", err),
            AppError::EventLoop(err) => write!(f, "Event loop error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    style: DrawStyle,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    simulation: SimulationSystem,
    /// Reused every frame
    batch: ShapeBatch,
    /// Set when the loop had to stop on an error
    fatal: Option<AppError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let style = config.rendering.draw_style();
        let simulation = SimulationSystem::from_config(&config);
        let batch = ShapeBatch::new(config.rendering.point_segments);

        Self {
            config,
            style,
            window: None,
            renderer: None,
            simulation,
            batch,
            fatal: None,
        }
    }

    /// Stop the loop; `main` reports the error
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// clear -> draw -> rotate -> present
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        self.simulation.draw(&mut self.batch, &self.style);
        self.simulation.tick();

        match renderer.present(&self.batch) {
            Ok(()) => {
                log::trace!(
                    "Frame {} ({} vertices)",
                    self.simulation.ticks(),
                    self.batch.vertices().len()
                );
            }
            Err(RenderError::SurfaceLost) => renderer.reconfigure(),
            Err(e) if e.is_fatal() => {
                self.fail(event_loop, AppError::Render(e));
                return;
            }
            Err(e) => log::warn!("Frame skipped: {}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, AppError::Window(e)),
        };

        let renderer = match RenderSystem::new(
            window.window().clone(),
            self.config.window.vsync,
            self.config.rendering.initial_color(),
        ) {
            Ok(renderer) => renderer,
            Err(e) => return self.fail(event_loop, AppError::Render(e)),
        };

        let (width, height) = renderer.size();
        log::info!("Renderer ready at {}x{} physical pixels", width, height);

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(InputAction::Exit) = InputMapper::map_window_event(&event) {
            log::info!("Quit requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::EventLoop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).map_err(AppError::EventLoop)?;

    log::info!("Simulated {} ticks", app.simulation.ticks());

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|config| config.debug.level_filter())
        .unwrap_or(log::LevelFilter::Info);

    // RUST_LOG, when set, overrides the configured level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::info!("Starting Hypercube");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The shape pipeline
//! - Presenting tessellated frames

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};
use hypercube_core::{Canvas, Color};
use hypercube_render::{
    context::{ContextError, RenderContext},
    pipeline::{ScreenUniforms, ShapePipeline},
    ShapeBatch,
};

use super::window::logical_size;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// The GPU surface could not be brought up
    Init(ContextError),
    /// Surface was lost or outdated (window moved between displays, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl RenderError {
    /// Whether the application has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::Init(_) | RenderError::OutOfMemory)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Init(err) => write!(f, "Renderer initialization failed: {}", err),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Init(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(err: ContextError) -> Self {
        RenderError::Init(err)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    window: Arc<Window>,
    context: RenderContext,
    pipeline: ShapePipeline,
}

impl RenderSystem {
    /// Create the render system and present one frame filled with `initial_color`
    pub fn new(
        window: Arc<Window>,
        vsync: bool,
        initial_color: Color,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window.clone(), vsync))?;
        let pipeline = ShapePipeline::new(&context.device, context.view_format);

        let mut system = Self {
            window,
            context,
            pipeline,
        };
        system.update_screen();

        let mut blank = ShapeBatch::default();
        blank.clear(initial_color);
        match system.present(&blank) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => system.reconfigure(),
            Err(e) => return Err(e),
        }

        Ok(system)
    }

    fn update_screen(&self) {
        let size = logical_size(&self.window);
        self.pipeline.update_screen(
            &self.context.queue,
            &ScreenUniforms::new(size.width, size.height),
        );
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
        self.update_screen();
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        log::info!("Reconfiguring surface");
        self.context.reconfigure();
    }

    /// Upload a batch and present it as the next frame
    pub fn present(&mut self, batch: &ShapeBatch) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        self.pipeline
            .upload(&self.context.device, &self.context.queue, batch.vertices());

        let view = self.context.create_view(&output);

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, batch.wgpu_clear_color());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::Init(ContextError::NoAdapter)),
            "Renderer initialization failed: No compatible GPU adapter found"
        );
    }

    #[test]
    fn test_fatal_errors() {
        assert!(RenderError::Init(ContextError::NoAdapter).is_fatal());
        assert!(RenderError::OutOfMemory.is_fatal());
        assert!(!RenderError::SurfaceLost.is_fatal());
        assert!(!RenderError::Other("timeout".to_string()).is_fatal());
    }
}

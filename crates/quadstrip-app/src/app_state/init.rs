//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use quadstrip_common::QuadstripError;
use quadstrip_config::schema::WindowConfig;
use quadstrip_renderer::RenderState;

use super::core::QuadstripApp;

pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.width as f64,
            config.height as f64,
        ))
}

impl QuadstripApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window = match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                self.fatal = Some(QuadstripError::Other(format!(
                    "failed to create window: {e}"
                )));
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone(), &self.config)) {
            Ok(rs) => {
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                self.fatal = Some(QuadstripError::Renderer(e.to_string()));
                return false;
            }
        }

        let size = window.inner_size();
        tracing::info!(
            "Window created ({}x{}, scale {:.2})",
            size.width,
            size.height,
            window.scale_factor()
        );
        self.window = Some(window);
        true
    }
}

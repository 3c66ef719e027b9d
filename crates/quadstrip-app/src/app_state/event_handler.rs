//! winit `ApplicationHandler` implementation.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use quadstrip_renderer::RendererError;

use super::core::QuadstripApp;

impl ApplicationHandler for QuadstripApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
                self.request_redraw();
            }

            _ => {}
        }
    }
}

impl QuadstripApp {
    /// Render one frame. Surface errors reconfigure the surface and skip
    /// the frame.
    fn render_frame(&mut self) {
        let elapsed = self.elapsed();
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        match rs.render_frame(elapsed) {
            Ok(()) => {}
            Err(RendererError::SurfaceError(_)) => {
                let size = rs.gpu.size;
                rs.resize(size.width, size.height);
            }
            Err(e) => tracing::error!("Render error: {e}"),
        }
    }
}

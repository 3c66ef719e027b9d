use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use quadstrip_common::QuadstripError;
use quadstrip_config::QuadstripConfig;
use quadstrip_renderer::RenderState;

pub struct QuadstripApp {
    pub(super) config: QuadstripConfig,
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) started: Instant,
    /// Set when startup fails; reported after the event loop exits.
    pub(super) fatal: Option<QuadstripError>,
}

impl QuadstripApp {
    pub fn new(config: QuadstripConfig) -> Self {
        Self {
            config,
            window: None,
            render_state: None,
            started: Instant::now(),
            fatal: None,
        }
    }

    /// Outcome of the run once the event loop has returned.
    pub fn into_result(self) -> quadstrip_common::Result<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Seconds since startup, used to drive the camera spin.
    pub(super) fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_has_no_window() {
        let app = QuadstripApp::new(QuadstripConfig::default());
        assert!(app.window.is_none());
        assert!(app.render_state.is_none());
        assert!(app.fatal.is_none());
    }

    #[test]
    fn clean_run_is_ok() {
        let app = QuadstripApp::new(QuadstripConfig::default());
        assert!(app.into_result().is_ok());
    }

    #[test]
    fn fatal_error_is_reported() {
        let mut app = QuadstripApp::new(QuadstripConfig::default());
        app.fatal = Some(QuadstripError::Renderer("no adapter".into()));
        let err = app.into_result().unwrap_err();
        assert_eq!(err.to_string(), "renderer error: no adapter");
    }

    #[test]
    fn elapsed_is_monotonic() {
        let app = QuadstripApp::new(QuadstripConfig::default());
        let a = app.elapsed();
        let b = app.elapsed();
        assert!(b >= a);
    }
}

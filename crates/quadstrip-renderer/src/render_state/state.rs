use std::path::Path;
use std::sync::Arc;
use winit::window::Window;

use quadstrip_config::QuadstripConfig;

use super::helpers::clear_color;
use crate::backend;
use crate::camera::StripCamera;
use crate::gpu::{GpuContext, RendererError};
use crate::shader;
use crate::strip::StripRenderer;

/// Core rendering state: GPU context, the strip pipeline and its camera.
pub struct RenderState {
    pub gpu: GpuContext,
    pub strip: StripRenderer,
    pub camera: StripCamera,
    pub instance_count: u32,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    ///
    /// Loads the compiled strip shader from `build.shader_dir`.
    pub async fn new(window: Arc<Window>, config: &QuadstripConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, backend::compiled_backends()).await?;

        let module = shader::load_strip_shader(&gpu.device, Path::new(&config.build.shader_dir))?;
        let strip = StripRenderer::new(
            &gpu.device,
            gpu.format(),
            &module,
            config.instancing.quad_size,
        );
        let camera = StripCamera::new(&config.camera, &config.instancing);

        tracing::info!(
            instances = config.instancing.instance_count,
            spacing = config.instancing.spacing,
            projection = ?config.camera.projection,
            "Strip renderer ready"
        );

        Ok(Self {
            gpu,
            strip,
            camera,
            instance_count: config.instancing.instance_count,
            clear_color: clear_color(config.window.clear_color),
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }
}

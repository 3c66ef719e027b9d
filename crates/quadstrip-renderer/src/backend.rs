//! Graphics backend selection.
//!
//! The build orchestrator picks a backend by enabling one of the crate's
//! cargo features; this module turns the enabled features into the
//! `wgpu::Backends` mask used when creating the instance.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicsBackend {
    Vulkan,
    OpenGl,
    Metal,
    Dx12,
}

impl GraphicsBackend {
    pub const ALL: [GraphicsBackend; 4] = [
        GraphicsBackend::Vulkan,
        GraphicsBackend::OpenGl,
        GraphicsBackend::Metal,
        GraphicsBackend::Dx12,
    ];

    /// Cargo feature name, as passed to `--features`.
    pub fn feature_name(self) -> &'static str {
        match self {
            GraphicsBackend::Vulkan => "vulkan",
            GraphicsBackend::OpenGl => "opengl",
            GraphicsBackend::Metal => "metal",
            GraphicsBackend::Dx12 => "dx12",
        }
    }

    pub fn wgpu_backends(self) -> wgpu::Backends {
        match self {
            GraphicsBackend::Vulkan => wgpu::Backends::VULKAN,
            GraphicsBackend::OpenGl => wgpu::Backends::GL,
            GraphicsBackend::Metal => wgpu::Backends::METAL,
            GraphicsBackend::Dx12 => wgpu::Backends::DX12,
        }
    }

    fn enabled(self) -> bool {
        match self {
            GraphicsBackend::Vulkan => cfg!(feature = "vulkan"),
            GraphicsBackend::OpenGl => cfg!(feature = "opengl"),
            GraphicsBackend::Metal => cfg!(feature = "metal"),
            GraphicsBackend::Dx12 => cfg!(feature = "dx12"),
        }
    }
}

impl fmt::Display for GraphicsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

/// Backends enabled through cargo features for this build.
pub fn enabled_backends() -> Vec<GraphicsBackend> {
    GraphicsBackend::ALL
        .into_iter()
        .filter(|b| b.enabled())
        .collect()
}

/// Fold a backend list into a `wgpu::Backends` mask.
///
/// An empty list allows every primary backend of the platform.
pub fn backends_mask(backends: &[GraphicsBackend]) -> wgpu::Backends {
    if backends.is_empty() {
        return wgpu::Backends::PRIMARY;
    }
    backends
        .iter()
        .fold(wgpu::Backends::empty(), |mask, b| mask | b.wgpu_backends())
}

/// The instance backend mask for this build.
pub fn compiled_backends() -> wgpu::Backends {
    backends_mask(&enabled_backends())
}

// =============================================================================
// Tests
// =============================================================================

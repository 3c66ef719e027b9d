//! Loading of the precompiled SPIR-V vertex program.
//!
//! `quadstrip-shaderc` writes `instanced_quad.spv` next to its WGSL source;
//! the host only ever consumes the binary.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::gpu::RendererError;

/// File name of the compiled strip shader inside the shader directory.
pub const STRIP_SHADER_FILE: &str = "instanced_quad.spv";

/// First word of every SPIR-V module.
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Path of the compiled strip shader under `shader_dir`.
pub fn strip_shader_path(shader_dir: &Path) -> PathBuf {
    shader_dir.join(STRIP_SHADER_FILE)
}

/// Decode little-endian SPIR-V bytes into words, checking length and magic.
pub fn parse_spirv(bytes: &[u8]) -> Result<Vec<u32>, RendererError> {
    if bytes.is_empty() {
        return Err(RendererError::ShaderLoad("SPIR-V binary is empty".into()));
    }
    if bytes.len() % 4 != 0 {
        return Err(RendererError::ShaderLoad(format!(
            "SPIR-V length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    if words[0] != SPIRV_MAGIC {
        return Err(RendererError::ShaderLoad(format!(
            "bad SPIR-V magic number {:#010x}",
            words[0]
        )));
    }
    Ok(words)
}

/// Read and decode a SPIR-V file.
pub fn read_spirv(path: &Path) -> Result<Vec<u32>, RendererError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RendererError::ShaderLoad(format!(
                "{} not found; run `quadstrip-build` to compile the shaders first",
                path.display()
            ))
        } else {
            RendererError::ShaderLoad(format!("failed to read {}: {e}", path.display()))
        }
    })?;
    parse_spirv(&bytes).map_err(|e| match e {
        RendererError::ShaderLoad(msg) => {
            RendererError::ShaderLoad(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

/// Load the compiled strip shader from `shader_dir` into a module.
pub fn load_strip_shader(
    device: &wgpu::Device,
    shader_dir: &Path,
) -> Result<wgpu::ShaderModule, RendererError> {
    let path = strip_shader_path(shader_dir);
    let words = read_spirv(&path)?;
    tracing::info!("Loaded {} ({} words)", path.display(), words.len());

    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("instanced quad shader"),
        source: wgpu::ShaderSource::SpirV(Cow::Owned(words)),
    }))
}

// =============================================================================
// Tests
// =============================================================================

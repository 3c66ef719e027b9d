//! Instance transform stage: the vertex-side data contract and a CPU
//! reference of `vs_main` in `shaders/instanced_quad.wgsl`.
//!
//! The GPU program and [`transform`] must stay in lockstep: both offset
//! the base vertex by `instance_index * spacing` along X, lift it to
//! `(x, y, 0, 1)` and multiply by the pushed MVP.

use crate::matrix::{self, Mat4, Vec4};

/// Shader location of [`Vertex::position`].
pub const POSITION_LOCATION: u32 = 0;
/// Shader location of [`Vertex::uv`].
pub const UV_LOCATION: u32 = 1;
/// Output location of the UV varying.
pub const UV_VARYING_LOCATION: u32 = 0;

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// One vertex of the base quad.
///
/// Layout: position(vec2) + uv(vec2) = 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl Vertex {
    /// wgpu vertex buffer layout for `Vertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec2<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: POSITION_LOCATION,
            },
            // uv: vec2<f32> at offset 8
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 8,
                shader_location: UV_LOCATION,
            },
        ],
    };
}

// ---------------------------------------------------------------------------
// PushConstants
// ---------------------------------------------------------------------------

/// Per-draw push-constant block matching the WGSL `PushConstants` struct.
///
/// Uploaded with `set_push_constants` before every draw; shared read-only by
/// all vertices and instances of that draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PushConstants {
    /// Model-view-projection matrix, column-major.
    pub mvp: Mat4,
}

impl PushConstants {
    /// Size of the block in bytes (one `mat4x4<f32>`).
    pub const SIZE: u32 = std::mem::size_of::<PushConstants>() as u32;

    pub fn new(mvp: Mat4) -> Self {
        Self { mvp }
    }

    /// Push-constant range declared in the pipeline layout.
    pub fn range() -> wgpu::PushConstantRange {
        wgpu::PushConstantRange {
            stages: wgpu::ShaderStages::VERTEX,
            range: 0..Self::SIZE,
        }
    }
}

impl Default for PushConstants {
    fn default() -> Self {
        Self::new(matrix::IDENTITY)
    }
}

// ---------------------------------------------------------------------------
// transform
// ---------------------------------------------------------------------------

/// What the vertex stage hands to the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageOutput {
    /// Clip-space position, before the perspective divide.
    pub clip_position: Vec4,
    /// UV varying, identical to the input UV.
    pub uv: [f32; 2],
}

/// World-space offset of instance `instance_index`.
pub fn instance_offset(instance_index: u32, spacing: f32) -> [f32; 2] {
    [instance_index as f32 * spacing, 0.0]
}

/// Run the vertex stage for one `(vertex, instance)` pair.
pub fn transform(
    vertex: &Vertex,
    instance_index: u32,
    push: &PushConstants,
    spacing: f32,
) -> StageOutput {
    let offset = instance_offset(instance_index, spacing);
    let world = [
        vertex.position[0] + offset[0],
        vertex.position[1] + offset[1],
    ];

    StageOutput {
        clip_position: matrix::transform(&push.mvp, [world[0], world[1], 0.0, 1.0]),
        uv: vertex.uv,
    }
}

// =============================================================================
// Tests
// =============================================================================

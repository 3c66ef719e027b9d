use wgpu::util::DeviceExt;

use super::pipeline::create_pipeline;
use super::types::{quad_vertices, QUAD_INDEX_COUNT, QUAD_INDICES};
use crate::stage::PushConstants;

/// Draws `instance_count` copies of the base quad in a single call.
pub struct StripRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl StripRenderer {
    /// Create the renderer for quads of side `quad_size`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        shader: &wgpu::ShaderModule,
        quad_size: f32,
    ) -> Self {
        let pipeline = create_pipeline(device, format, shader);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("strip vertices"),
            contents: bytemuck::cast_slice(&quad_vertices(quad_size)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("strip indices"),
            contents: bytemuck::cast_slice(QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
        }
    }

    /// Push the MVP and draw the strip into the render pass.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, push: &PushConstants, instance_count: u32) {
        if instance_count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_push_constants(wgpu::ShaderStages::VERTEX, 0, bytemuck::bytes_of(push));
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..QUAD_INDEX_COUNT, 0, 0..instance_count);
    }
}

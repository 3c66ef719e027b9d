//! wgpu host for the instanced quad strip.
//!
//! The vertex program positions every instance at `instance_index * k`
//! along X and projects it with a pushed MVP; [`stage`] holds the CPU
//! reference of that transform and the shared data layouts.

pub mod backend;
pub mod camera;
pub mod gpu;
pub mod matrix;
pub mod render_state;
pub mod shader;
pub mod stage;
pub mod strip;

pub use backend::{compiled_backends, GraphicsBackend};
pub use camera::StripCamera;
pub use gpu::{GpuContext, RendererError};
pub use render_state::RenderState;
pub use stage::{transform, PushConstants, StageOutput, Vertex};
pub use strip::StripRenderer;

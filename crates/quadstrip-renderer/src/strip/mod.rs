//! Instanced strip of quads drawn with one indexed draw call.
//!
//! The base quad lives in a static vertex buffer; every instance is
//! positioned by the vertex program from its instance index, so there is no
//! per-instance buffer and no bind group. The MVP arrives as a push
//! constant before each draw.

mod pipeline;
mod renderer;
mod types;

pub use renderer::*;
pub use types::{quad_vertices, QUAD_INDICES};

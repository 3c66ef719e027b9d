mod frame;
mod helpers;
mod state;

pub use state::RenderState;

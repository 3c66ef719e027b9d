//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Projection used to build the per-frame MVP matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProjectionKind {
    #[default]
    Orthographic,
    Perspective,
}

/// Camera framing the instanced strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub projection: ProjectionKind,
    /// Vertical field of view for the perspective projection (valid range: 10-120).
    pub fov_degrees: f32,
    /// World units left free around the strip (valid range: 0.0-10.0).
    pub margin: f32,
    /// Rotation speed around the strip's vertical axis in radians per
    /// second (valid range: -10.0-10.0). Zero keeps the strip still.
    pub spin_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::Orthographic,
            fov_degrees: 60.0,
            margin: 0.25,
            spin_speed: 0.0,
        }
    }
}

//! Camera framing the whole strip.
//!
//! The strip occupies `strip_extent_x()` horizontally and `0..quad_size`
//! vertically in the z = 0 plane. The camera centers that box, optionally
//! spins it around its vertical axis and fits it to the viewport with
//! `margin` world units of padding.

use quadstrip_config::schema::{CameraConfig, InstancingConfig, ProjectionKind};

use crate::matrix::{self, Mat4};

#[derive(Debug, Clone)]
pub struct StripCamera {
    projection: ProjectionKind,
    fov_y: f32,
    margin: f32,
    spin_speed: f32,
    center: [f32; 2],
    half_extent: [f32; 2],
}

impl StripCamera {
    pub fn new(camera: &CameraConfig, instancing: &InstancingConfig) -> Self {
        let (lo, hi) = instancing.strip_extent_x();
        let size = instancing.quad_size;

        Self {
            projection: camera.projection,
            fov_y: camera.fov_degrees.to_radians(),
            margin: camera.margin,
            spin_speed: camera.spin_speed,
            center: [(lo + hi) * 0.5, size * 0.5],
            half_extent: [(hi - lo) * 0.5, size * 0.5],
        }
    }

    /// Strip rotation at `elapsed` seconds, about the strip center.
    pub fn model(&self, elapsed: f32) -> Mat4 {
        let centered = matrix::translate(-self.center[0], -self.center[1], 0.0);
        if self.spin_speed == 0.0 {
            return centered;
        }
        matrix::mul(&matrix::rotate_y(self.spin_speed * elapsed), &centered)
    }

    /// Projection times view for a viewport of the given aspect ratio.
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        // Bound of |z| once the strip spins about its center.
        let radius = self.half_extent[0];
        let half_w = self.half_extent[0] + self.margin;
        let half_h = self.half_extent[1] + self.margin;

        match self.projection {
            ProjectionKind::Orthographic => {
                let (w, h) = fit_aspect(half_w, half_h, aspect);
                let depth = radius + 1.0;
                matrix::orthographic(-w, w, -h, h, -depth, depth)
            }
            ProjectionKind::Perspective => {
                let tan = (self.fov_y * 0.5).tan();
                let fit = half_h.max(half_w / aspect) / tan;
                let distance = fit + radius;
                let near = fit * 0.5;
                let far = distance + radius + 1.0;
                let proj = matrix::perspective(self.fov_y, aspect, near, far);
                matrix::mul(&proj, &matrix::translate(0.0, 0.0, -distance))
            }
        }
    }

    /// The full MVP for one frame.
    pub fn mvp(&self, aspect: f32, elapsed: f32) -> Mat4 {
        matrix::mul(&self.view_projection(aspect), &self.model(elapsed))
    }
}

/// Grow one half extent so the box matches `aspect` (width / height).
fn fit_aspect(half_w: f32, half_h: f32, aspect: f32) -> (f32, f32) {
    if half_w / half_h > aspect {
        (half_w, half_w / aspect)
    } else {
        (half_h * aspect, half_h)
    }
}

// =============================================================================
// Tests
// =============================================================================

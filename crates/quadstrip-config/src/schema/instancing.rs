//! Instanced strip configuration.

use serde::{Deserialize, Serialize};

/// Default horizontal distance between neighbouring instances.
pub const DEFAULT_INSTANCE_SPACING: f32 = 1.0;

/// Environment variable carrying the spacing from the build orchestrator to
/// the shader compiler.
pub const SPACING_ENV: &str = "QUADSTRIP_INSTANCE_SPACING";

/// How many copies of the base quad are drawn and how they are laid out.
///
/// Instance `i` is offset by `(i * spacing, 0)` in world space before the
/// MVP transform is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InstancingConfig {
    /// Instances per draw call (valid range: 1-4096).
    pub instance_count: u32,
    /// World-space step between instances along X (valid range: -100.0-100.0).
    pub spacing: f32,
    /// Edge length of the base quad in world units (valid range: 0.01-10.0).
    pub quad_size: f32,
}

impl Default for InstancingConfig {
    fn default() -> Self {
        Self {
            instance_count: 8,
            spacing: DEFAULT_INSTANCE_SPACING,
            quad_size: 0.8,
        }
    }
}

impl InstancingConfig {
    /// World-space extent of the whole strip along X: `[min_x, max_x]`.
    ///
    /// Negative spacing grows the strip towards -X.
    pub fn strip_extent_x(&self) -> (f32, f32) {
        let last = self.instance_count.saturating_sub(1) as f32 * self.spacing;
        let (lo, hi) = if last < 0.0 { (last, 0.0) } else { (0.0, last) };
        (lo, hi + self.quad_size)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spacing_is_one() {
        let config = InstancingConfig::default();
        assert_eq!(config.spacing, 1.0);
        assert_eq!(config.instance_count, 8);
    }

    #[test]
    fn strip_extent_covers_last_quad() {
        let config = InstancingConfig {
            instance_count: 4,
            spacing: 1.0,
            quad_size: 0.5,
        };
        assert_eq!(config.strip_extent_x(), (0.0, 3.5));
    }

    #[test]
    fn strip_extent_with_negative_spacing() {
        let config = InstancingConfig {
            instance_count: 3,
            spacing: -2.0,
            quad_size: 1.0,
        };
        assert_eq!(config.strip_extent_x(), (-4.0, 1.0));
    }

    #[test]
    fn single_instance_extent_is_quad() {
        let config = InstancingConfig {
            instance_count: 1,
            spacing: 10.0,
            quad_size: 0.8,
        };
        assert_eq!(config.strip_extent_x(), (0.0, 0.8));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: InstancingConfig = toml::from_str("instance_count = 32").unwrap();
        assert_eq!(config.instance_count, 32);
        assert_eq!(config.spacing, DEFAULT_INSTANCE_SPACING);
    }
}

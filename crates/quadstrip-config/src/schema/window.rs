//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 64-8192).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 64-8192).
    pub height: u32,
    /// Linear RGB clear color, each component 0.0-1.0.
    pub clear_color: [f64; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "quadstrip".into(),
            width: 1280,
            height: 720,
            clear_color: [0.02, 0.02, 0.05],
        }
    }
}

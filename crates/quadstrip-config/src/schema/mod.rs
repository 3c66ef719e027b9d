//! Configuration schema types for quadstrip.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod build;
mod camera;
mod instancing;
mod logging;
mod window;

pub use build::*;
pub use camera::*;
pub use instancing::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration, read from `quadstrip.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuadstripConfig {
    pub instancing: InstancingConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub build: BuildConfig,
    pub logging: LoggingConfig,
}

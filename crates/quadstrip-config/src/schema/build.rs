//! Build orchestration settings.

use serde::{Deserialize, Serialize};

/// Backend selected when the orchestrator gets no argument.
pub const DEFAULT_BACKEND: &str = "vulkan";

/// Where the shader compilation step lives and how the application is
/// launched once shaders are compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Backend feature passed to the application step when none is given.
    pub default_backend: String,
    /// Shader source directory, relative to the workspace root.
    pub shader_dir: String,
    /// Compilation driver, run with no arguments inside `shader_dir`.
    pub shader_compiler: String,
    /// Application build/run command. `--features <backend>` is appended.
    pub app_command: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_backend: DEFAULT_BACKEND.into(),
            shader_dir: "shaders".into(),
            shader_compiler: "./compile.sh".into(),
            app_command: vec![
                "cargo".into(),
                "run".into(),
                "-p".into(),
                "quadstrip-app".into(),
            ],
        }
    }
}

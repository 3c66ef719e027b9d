//! TOML config file loading and creation.

use crate::schema::QuadstripConfig;
use crate::validation;
use quadstrip_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quadstrip.toml";

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<QuadstripConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: QuadstripConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(QuadstripConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, or return defaults when the file does not exist.
///
/// Unlike [`load_from_path`], a missing file is not an error: a project
/// without `quadstrip.toml` runs on defaults.
pub fn load_or_default(path: &Path) -> Result<QuadstripConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(QuadstripConfig::default())
        }
        other => other,
    }
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::ParseError(format!(
                    "failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> &'static str {
    r##"# quadstrip configuration
# Only override what you want to change -- missing fields use defaults.

[instancing]
# instance_count = 8     # 1-4096
# spacing = 1.0          # -100.0-100.0, X step between instances
# quad_size = 0.8        # 0.01-10.0

[camera]
# projection = "orthographic"  # orthographic, perspective
# fov_degrees = 60.0     # 10-120, perspective only
# margin = 0.25          # 0.0-10.0
# spin_speed = 0.0       # radians per second, -10.0-10.0

[window]
# title = "quadstrip"
# width = 1280           # 64-8192
# height = 720           # 64-8192
# clear_color = [0.02, 0.02, 0.05]

[build]
# default_backend = "vulkan"     # vulkan, opengl, metal, dx12
# shader_dir = "shaders"
# shader_compiler = "./compile.sh"
# app_command = ["cargo", "run", "-p", "quadstrip-app"]

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}

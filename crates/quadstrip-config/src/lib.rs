//! quadstrip configuration system.
//!
//! One TOML file, `quadstrip.toml`, drives the shader build, the instanced
//! strip layout and the host window. All sections use defaults so partial
//! configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::QuadstripConfig;
pub use toml_loader::{load_from_path, load_or_default, DEFAULT_CONFIG_FILE};

use quadstrip_common::ConfigError;
use std::path::Path;

/// Load and validate the config at `path`, falling back to defaults when
/// the file is missing.
pub fn load_config(path: &Path) -> Result<QuadstripConfig, ConfigError> {
    let config = toml_loader::load_or_default(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &QuadstripConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&QuadstripConfig::default());
        assert!(json.contains("\"instancing\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"build\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&QuadstripConfig::default());
        let parsed: QuadstripConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.build.default_backend, "vulkan");
        assert_eq!(parsed.instancing.spacing, 1.0);
    }

    #[test]
    fn load_config_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.instancing.instance_count, 8);
    }
}

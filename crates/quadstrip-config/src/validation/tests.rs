//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = QuadstripConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_instances() {
    let mut config = QuadstripConfig::default();
    config.instancing.instance_count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("instancing.instance_count"));
}

#[test]
fn catches_too_many_instances() {
    let mut config = QuadstripConfig::default();
    config.instancing.instance_count = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("instancing.instance_count"));
}

#[test]
fn negative_spacing_is_allowed() {
    let mut config = QuadstripConfig::default();
    config.instancing.spacing = -1.5;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_finite_spacing() {
    let mut config = QuadstripConfig::default();
    config.instancing.spacing = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("instancing.spacing"));

    config.instancing.spacing = f32::INFINITY;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("instancing.spacing"));
}

#[test]
fn catches_tiny_quad() {
    let mut config = QuadstripConfig::default();
    config.instancing.quad_size = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("instancing.quad_size"));
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = QuadstripConfig::default();
    config.camera.fov_degrees = 170.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.fov_degrees"));
}

#[test]
fn catches_clear_color_channel() {
    let mut config = QuadstripConfig::default();
    config.window.clear_color = [0.0, 1.5, 0.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.clear_color.g"));
}

#[test]
fn catches_empty_backend() {
    let mut config = QuadstripConfig::default();
    config.build.default_backend = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("build.default_backend"));
}

#[test]
fn catches_empty_app_command() {
    let mut config = QuadstripConfig::default();
    config.build.app_command.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("build.app_command"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = QuadstripConfig::default();
    config.window.width = 10;
    config.camera.margin = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("camera.margin"));
    assert!(err.contains("; "));
}

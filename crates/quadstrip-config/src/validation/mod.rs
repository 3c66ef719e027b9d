//! Full configuration validation.
//!
//! Each section is checked independently and every problem is collected
//! into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::QuadstripConfig;
use helpers::{validate_non_empty, validate_range, validate_range_f64};
use quadstrip_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuadstripConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_instancing(&mut errors, config);
    validate_camera(&mut errors, config);
    validate_window(&mut errors, config);
    validate_build(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_instancing(errors: &mut Vec<String>, config: &QuadstripConfig) {
    let inst = &config.instancing;
    validate_range(errors, "instancing.instance_count", inst.instance_count, 1, 4096);
    validate_range_f64(errors, "instancing.spacing", inst.spacing as f64, -100.0, 100.0);
    validate_range_f64(errors, "instancing.quad_size", inst.quad_size as f64, 0.01, 10.0);
}

fn validate_camera(errors: &mut Vec<String>, config: &QuadstripConfig) {
    let cam = &config.camera;
    validate_range_f64(errors, "camera.fov_degrees", cam.fov_degrees as f64, 10.0, 120.0);
    validate_range_f64(errors, "camera.margin", cam.margin as f64, 0.0, 10.0);
    validate_range_f64(errors, "camera.spin_speed", cam.spin_speed as f64, -10.0, 10.0);
}

fn validate_window(errors: &mut Vec<String>, config: &QuadstripConfig) {
    let win = &config.window;
    validate_range(errors, "window.width", win.width, 64, 8192);
    validate_range(errors, "window.height", win.height, 64, 8192);
    for (channel, value) in ["r", "g", "b"].iter().zip(win.clear_color) {
        validate_range_f64(errors, &format!("window.clear_color.{channel}"), value, 0.0, 1.0);
    }
}

fn validate_build(errors: &mut Vec<String>, config: &QuadstripConfig) {
    let build = &config.build;
    validate_non_empty(errors, "build.default_backend", &build.default_backend);
    validate_non_empty(errors, "build.shader_dir", &build.shader_dir);
    validate_non_empty(errors, "build.shader_compiler", &build.shader_compiler);
    match build.app_command.first() {
        Some(program) => validate_non_empty(errors, "build.app_command[0]", program),
        None => errors.push("build.app_command must not be empty".into()),
    }
}

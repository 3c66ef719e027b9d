//! quadstrip-shaderc: compile every WGSL shader in a directory to SPIR-V.
//!
//! Run with no arguments from the shader directory (what `compile.sh`
//! does). The instance spacing comes from `--spacing`, then the
//! `QUADSTRIP_INSTANCE_SPACING` environment variable set by the
//! orchestrator, then `instancing.spacing` in the config file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quadstrip_config::toml_loader::DEFAULT_CONFIG_FILE;
use quadstrip_shaderc::{compile_dir, ShaderDefs, SPACING_ENV};

#[derive(Parser, Debug)]
#[command(name = "quadstrip-shaderc", version, about = "Compile WGSL shaders to SPIR-V")]
struct Args {
    /// Directory holding the .wgsl sources.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Horizontal step between instances, baked into INSTANCE_SPACING.
    #[arg(long, env = SPACING_ENV)]
    spacing: Option<f32>,

    /// Config file consulted when no spacing is given.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn run(args: &Args) -> quadstrip_common::Result<()> {
    let defs = ShaderDefs::resolve(args.spacing, &args.config)?;
    let outputs = compile_dir(&args.dir, &defs)?;
    tracing::info!(
        dir = %args.dir.display(),
        spacing = defs.instance_spacing,
        "{} shader(s) compiled",
        outputs.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadstrip_shaderc=info".into()),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_current_dir() {
        let args = Args::try_parse_from(["quadstrip-shaderc"]).unwrap();
        assert_eq!(args.dir, PathBuf::from("."));
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn config_flag_is_parsed() {
        let args =
            Args::try_parse_from(["quadstrip-shaderc", "--config", "../quadstrip.toml"]).unwrap();
        assert_eq!(args.config, PathBuf::from("../quadstrip.toml"));
    }

    #[test]
    fn run_takes_spacing_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("quadstrip.toml");
        std::fs::write(&config, "[instancing]\nspacing = 2.0\n").unwrap();
        std::fs::write(
            dir.path().join("k.wgsl"),
            "@vertex fn vs() -> @builtin(position) vec4<f32> { \
             return vec4<f32>(INSTANCE_SPACING, 0.0, 0.0, 1.0); }",
        )
        .unwrap();

        let args = Args {
            dir: dir.path().to_path_buf(),
            spacing: None,
            config,
        };
        run(&args).unwrap();
        assert!(dir.path().join("k.spv").exists());
    }

    #[test]
    fn run_reports_shader_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.wgsl"), "fn main( {").unwrap();

        let args = Args {
            dir: dir.path().to_path_buf(),
            spacing: Some(1.0),
            config: dir.path().join("absent.toml"),
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(err, quadstrip_common::QuadstripError::Shader(_)));
    }

    #[test]
    fn spacing_flag_is_parsed() {
        let args =
            Args::try_parse_from(["quadstrip-shaderc", "--spacing", "2.5", "shaders"]).unwrap();
        assert_eq!(args.spacing, Some(2.5));
        assert_eq!(args.dir, PathBuf::from("shaders"));
    }
}

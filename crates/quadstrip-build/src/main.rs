//! quadstrip-build: compile the shaders, then run the application with the
//! chosen graphics backend.
//!
//! ```text
//! quadstrip-build            # configured default backend (vulkan)
//! quadstrip-build opengl     # cargo run -p quadstrip-app --features opengl
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use quadstrip_build::{run, ProcessRunner};
use quadstrip_common::QuadstripError;
use quadstrip_config::schema::LogLevel;
use quadstrip_config::{QuadstripConfig, DEFAULT_CONFIG_FILE};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "quadstrip-build",
    version,
    about = "Compile shaders and run quadstrip with a graphics backend"
)]
struct Args {
    /// Backend feature to enable (vulkan, opengl, metal, dx12).
    /// Defaults to `build.default_backend`.
    api: Option<String>,

    /// Config file path.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log filter directive, overrides `logging.level`.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the resolved config as JSON and exit.
    #[arg(long)]
    print_config: bool,

    /// Write a documented default config to the config path and exit.
    #[arg(long, conflicts_with = "print_config")]
    init_config: bool,
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    )
}

fn load_config(path: &Path) -> QuadstripConfig {
    quadstrip_config::load_config(path).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        QuadstripConfig::default()
    })
}

/// Write the documented default config to `path`, refusing to overwrite.
fn init_config(path: &Path) -> quadstrip_common::Result<()> {
    if path.exists() {
        return Err(QuadstripError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        )));
    }
    quadstrip_config::toml_loader::create_default_config(path)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Config problems are reported before the configured level is known.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(
            args.log_level
                .as_deref()
                .unwrap_or(LogLevel::default().as_directive()),
        ))
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&args.config));

    let directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .init();

    if args.init_config {
        if let Err(e) = init_config(&args.config) {
            tracing::error!("{e}");
            std::process::exit(1);
        }
        tracing::info!("Wrote {}", args.config.display());
        return;
    }

    if args.print_config {
        println!("{}", quadstrip_config::config_to_json(&config));
        return;
    }

    tracing::info!("quadstrip-build v{}", env!("CARGO_PKG_VERSION"));
    let code = run(args.api.as_deref(), &config, &mut ProcessRunner);
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["quadstrip-build"]).unwrap();
        assert_eq!(args.api, None);
        assert_eq!(args.config, PathBuf::from("quadstrip.toml"));
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
        assert!(!args.init_config);
    }

    #[test]
    fn init_and_print_conflict() {
        assert!(
            Args::try_parse_from(["quadstrip-build", "--init-config", "--print-config"]).is_err()
        );
    }

    #[test]
    fn positional_backend() {
        let args = Args::try_parse_from(["quadstrip-build", "opengl"]).unwrap();
        assert_eq!(args.api.as_deref(), Some("opengl"));
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "quadstrip-build",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "--print-config",
            "metal",
        ])
        .unwrap();
        assert_eq!(args.api.as_deref(), Some("metal"));
        assert_eq!(args.config, PathBuf::from("custom.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
    }

    #[test]
    fn too_many_positionals_rejected() {
        assert!(Args::try_parse_from(["quadstrip-build", "vulkan", "opengl"]).is_err());
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml"));
        assert_eq!(config.build.default_backend, "vulkan");
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quadstrip.toml");
        std::fs::write(&path, "[instancing]\ninstance_count = 0\n").unwrap();
        let config = load_config(&path);
        assert_eq!(config.instancing.instance_count, 8);
    }

    #[test]
    fn init_config_writes_a_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quadstrip.toml");
        init_config(&path).unwrap();
        let config = quadstrip_config::load_config(&path).unwrap();
        assert_eq!(config.build.default_backend, "vulkan");
    }

    #[test]
    fn init_config_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quadstrip.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(matches!(
            &err,
            QuadstripError::Io(e) if e.kind() == std::io::ErrorKind::AlreadyExists
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn init_config_write_failure_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = init_config(&blocker.join("quadstrip.toml")).unwrap_err();
        assert!(matches!(err, QuadstripError::Config(_)));
    }
}

mod app_state;
mod cli;

use std::process::ExitCode;

use quadstrip_common::QuadstripError;
use quadstrip_config::QuadstripConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// wgpu is chatty at info; keep it at warn unless RUST_LOG says otherwise.
const GPU_DIRECTIVES: &[&str] = &["wgpu_core=warn", "wgpu_hal=warn", "naga=warn"];

fn env_filter(level: &str) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(
        level
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );
    for directive in GPU_DIRECTIVES {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }
    filter
}

fn load_config(args: &cli::Args) -> QuadstripConfig {
    quadstrip_config::load_config(&args.config).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        QuadstripConfig::default()
    })
}

fn run(config: QuadstripConfig) -> quadstrip_common::Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| QuadstripError::Other(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::QuadstripApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| QuadstripError::Other(format!("event loop error: {e}")))?;

    app.into_result()
}

fn main() -> ExitCode {
    let args = cli::parse();

    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref().unwrap_or("info")))
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&args));

    let level = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .init();

    tracing::info!(
        backends = ?quadstrip_renderer::backend::enabled_backends(),
        "quadstrip v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    match run(config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

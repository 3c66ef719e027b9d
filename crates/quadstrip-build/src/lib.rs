//! Build orchestration: compile the shaders, then build and run the
//! application with the selected graphics backend enabled.
//!
//! Steps are described as plain [`Step`] values and executed through a
//! [`StepRunner`], so the sequencing logic can be exercised without
//! spawning processes.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use quadstrip_config::schema::{BuildConfig, SPACING_ENV};
use quadstrip_config::QuadstripConfig;

/// Exit code reported for a step whose program could not be started.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Exit code reported for a step terminated by a signal when the signal
/// number is unavailable.
pub const SIGNAL_EXIT_CODE: i32 = 1;

/// Base added to the signal number of a killed step, as shells report it.
pub const SIGNAL_EXIT_BASE: i32 = 128;

// ---------------------------------------------------------------------------
// BuildError
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} command is empty")]
    EmptyCommand(&'static str),
}

impl BuildError {
    pub fn exit_code(&self) -> i32 {
        SPAWN_FAILURE_EXIT_CODE
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub program: String,
    pub args: Vec<String>,
    /// Working directory of the child; the orchestrator never changes its own.
    pub current_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl Step {
    /// Shell-like rendering for logs.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Executes steps and reports their exit codes.
pub trait StepRunner {
    fn run_step(&mut self, step: &Step) -> Result<i32, BuildError>;
}

/// Runs steps as blocking child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn command(step: &Step) -> Command {
        let mut cmd = Command::new(program_path(&step.program, step.current_dir.as_deref()));
        cmd.args(&step.args);
        if let Some(dir) = &step.current_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &step.env {
            cmd.env(key, value);
        }
        cmd
    }
}

impl StepRunner for ProcessRunner {
    fn run_step(&mut self, step: &Step) -> Result<i32, BuildError> {
        let status = Self::command(step)
            .status()
            .map_err(|source| BuildError::Spawn {
                program: step.program.clone(),
                source,
            })?;
        Ok(exit_code(status))
    }
}

/// A relative program path with a directory part (`./compile.sh`) names a
/// file inside the step's working directory. Bare names go through `PATH`.
fn program_path(program: &str, current_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(program);
    match current_dir {
        Some(dir) if path.is_relative() && path.components().count() > 1 => {
            let joined = dir.join(path);
            std::path::absolute(&joined).unwrap_or(joined)
        }
        _ => path.to_path_buf(),
    }
}

/// Exit code of a finished child.
///
/// A child killed by a signal reports `128 + signo` on unix and
/// [`SIGNAL_EXIT_CODE`] elsewhere.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signo) = status.signal() {
            return SIGNAL_EXIT_BASE + signo;
        }
    }
    SIGNAL_EXIT_CODE
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Backend feature to enable: the argument verbatim, or the configured
/// default when absent or empty.
pub fn resolve_backend(api: Option<&str>, build: &BuildConfig) -> String {
    match api {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => build.default_backend.clone(),
    }
}

/// Shader compilation step: the configured compiler, no arguments, run
/// inside the shader directory with the instance spacing in its env.
pub fn compile_step(config: &QuadstripConfig) -> Step {
    Step {
        name: "shader compilation",
        program: config.build.shader_compiler.clone(),
        args: Vec::new(),
        current_dir: Some(PathBuf::from(&config.build.shader_dir)),
        env: vec![(
            SPACING_ENV.to_string(),
            config.instancing.spacing.to_string(),
        )],
    }
}

/// Application step: the configured app command with
/// `--features <backend>` appended.
pub fn app_step(build: &BuildConfig, backend: &str) -> Result<Step, BuildError> {
    let (program, rest) = build
        .app_command
        .split_first()
        .ok_or(BuildError::EmptyCommand("application"))?;

    let mut args = rest.to_vec();
    args.push("--features".to_string());
    args.push(backend.to_string());

    Ok(Step {
        name: "application",
        program: program.clone(),
        args,
        current_dir: None,
        env: Vec::new(),
    })
}

fn run_one(runner: &mut dyn StepRunner, step: &Step) -> i32 {
    tracing::info!(step = step.name, "Running: {}", step.display_command());
    match runner.run_step(step) {
        Ok(code) => {
            if code == 0 {
                tracing::info!(step = step.name, "Step succeeded");
            } else {
                tracing::error!(step = step.name, code, "Step failed");
            }
            code
        }
        Err(e) => {
            tracing::error!(step = step.name, "{e}");
            e.exit_code()
        }
    }
}

/// Run the full sequence and return the process exit code.
///
/// A failing compilation stops the run with its exit code; otherwise the
/// application step's code is returned.
pub fn run(api: Option<&str>, config: &QuadstripConfig, runner: &mut dyn StepRunner) -> i32 {
    let backend = resolve_backend(api, &config.build);
    tracing::info!(backend = %backend, "Selected graphics backend");

    let code = run_one(runner, &compile_step(config));
    if code != 0 {
        return code;
    }

    match app_step(&config.build, &backend) {
        Ok(step) => run_one(runner, &step),
        Err(e) => {
            tracing::error!("{e}");
            e.exit_code()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

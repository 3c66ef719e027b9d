//! End-to-end orchestration against real child processes.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use quadstrip_build::{run, ProcessRunner, SPAWN_FAILURE_EXIT_CODE};
use quadstrip_config::QuadstripConfig;

/// Writing a script while another test forks can leave it busy on exec.
static SERIAL: Mutex<()> = Mutex::new(());

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new(compile_script: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let shaders = dir.path().join("shaders");
        std::fs::create_dir(&shaders).unwrap();
        write_script(&shaders.join("compile.sh"), compile_script);
        Self { dir }
    }

    fn shader_dir(&self) -> PathBuf {
        self.dir.path().join("shaders")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config whose app step records its arguments and exits with `code`.
    fn config(&self, code: i32) -> QuadstripConfig {
        let mut config = QuadstripConfig::default();
        config.build.shader_dir = self.shader_dir().display().to_string();
        config.build.app_command = vec![
            "sh".into(),
            "-c".into(),
            format!(
                "printf '%s\\n' \"$@\" > '{}'; exit {code}",
                self.path("app_args.txt").display()
            ),
            "app".into(),
        ];
        config
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn opengl_is_passed_as_feature_flag() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("pwd > pwd.txt\necho \"$QUADSTRIP_INSTANCE_SPACING\" > spacing.txt");
    let config = ws.config(0);

    assert_eq!(run(Some("opengl"), &config, &mut ProcessRunner), 0);

    assert_eq!(read(&ws.path("app_args.txt")), "--features\nopengl\n");
    assert_eq!(read(&ws.shader_dir().join("spacing.txt")).trim(), "1");
    let pwd = PathBuf::from(read(&ws.shader_dir().join("pwd.txt")).trim());
    assert_eq!(
        pwd.canonicalize().unwrap(),
        ws.shader_dir().canonicalize().unwrap()
    );
}

#[test]
fn default_backend_without_argument() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("exit 0");
    let config = ws.config(0);

    assert_eq!(run(None, &config, &mut ProcessRunner), 0);
    assert_eq!(read(&ws.path("app_args.txt")), "--features\nvulkan\n");
}

#[test]
fn failing_compilation_skips_the_app() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("exit 3");
    let config = ws.config(0);

    assert_eq!(run(Some("opengl"), &config, &mut ProcessRunner), 3);
    assert!(!ws.path("app_args.txt").exists());
}

#[test]
fn app_exit_code_is_propagated() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("exit 0");
    let config = ws.config(5);

    assert_eq!(run(None, &config, &mut ProcessRunner), 5);
    assert!(ws.path("app_args.txt").exists());
}

#[test]
fn compiler_killed_by_signal_is_128_plus_signo() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("kill -9 $$");
    let config = ws.config(0);

    assert_eq!(run(None, &config, &mut ProcessRunner), 128 + 9);
    assert!(!ws.path("app_args.txt").exists());
}

#[test]
fn missing_compiler_is_127() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("exit 0");
    let mut config = ws.config(0);
    config.build.shader_compiler = "./no_such_compiler.sh".into();

    assert_eq!(
        run(None, &config, &mut ProcessRunner),
        SPAWN_FAILURE_EXIT_CODE
    );
    assert!(!ws.path("app_args.txt").exists());
}

#[test]
fn orchestrator_working_directory_is_unchanged() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = Workspace::new("exit 0");
    let config = ws.config(0);

    let before = std::env::current_dir().unwrap();
    run(None, &config, &mut ProcessRunner);
    assert_eq!(std::env::current_dir().unwrap(), before);
}

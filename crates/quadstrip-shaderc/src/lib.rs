//! WGSL to SPIR-V compilation step.
//!
//! Every `*.wgsl` file in a directory is parsed and validated with naga and
//! written next to its source as `<stem>.spv`. Re-running overwrites the
//! previous outputs.

use std::path::{Path, PathBuf};

use naga::back::spv;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use quadstrip_common::QuadstripError;

/// Extension of shader sources picked up by [`compile_dir`].
pub const SOURCE_EXTENSION: &str = "wgsl";

/// Extension of the written SPIR-V binaries.
pub const OUTPUT_EXTENSION: &str = "spv";

pub use quadstrip_config::schema::SPACING_ENV;

// ---------------------------------------------------------------------------
// ShaderError
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {name}:\n{message}")]
    Parse { name: String, message: String },

    #[error("validation error in {name}:\n{message}")]
    Validation { name: String, message: String },

    #[error("spir-v emit error in {name}: {message}")]
    Emit { name: String, message: String },

    #[error("instance spacing must be finite, got {0}")]
    InvalidSpacing(f32),
}

impl From<ShaderError> for QuadstripError {
    fn from(e: ShaderError) -> Self {
        QuadstripError::Shader(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// ShaderDefs
// ---------------------------------------------------------------------------

/// Constants injected into every compiled source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderDefs {
    /// Value of `INSTANCE_SPACING`, the per-instance X step.
    pub instance_spacing: f32,
}

impl Default for ShaderDefs {
    fn default() -> Self {
        Self {
            instance_spacing: quadstrip_config::schema::DEFAULT_INSTANCE_SPACING,
        }
    }
}

impl ShaderDefs {
    pub fn new(instance_spacing: f32) -> Result<Self, ShaderError> {
        if !instance_spacing.is_finite() {
            return Err(ShaderError::InvalidSpacing(instance_spacing));
        }
        Ok(Self { instance_spacing })
    }

    /// Defs for an explicit spacing, or for `instancing.spacing` of the config
    /// at `config_path` when none is given.
    ///
    /// An unreadable or invalid config falls back to the default spacing.
    pub fn resolve(explicit: Option<f32>, config_path: &Path) -> Result<Self, ShaderError> {
        let spacing = match explicit {
            Some(spacing) => spacing,
            None => match quadstrip_config::load_config(config_path) {
                Ok(config) => config.instancing.spacing,
                Err(e) => {
                    tracing::warn!("Config load failed, using default spacing: {e}");
                    quadstrip_config::schema::DEFAULT_INSTANCE_SPACING
                }
            },
        };
        Self::new(spacing)
    }

    /// WGSL declarations appended after the user source.
    ///
    /// Appending keeps naga's line numbers pointing at the original file;
    /// module-scope declarations in WGSL are order independent.
    pub fn to_wgsl(&self) -> String {
        format!(
            "\n// generated by quadstrip-shaderc\nconst INSTANCE_SPACING: f32 = {:?};\n",
            self.instance_spacing
        )
    }
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// A validated module together with its SPIR-V words.
#[derive(Debug)]
pub struct CompiledShader {
    pub module: naga::Module,
    pub info: naga::valid::ModuleInfo,
    pub spirv: Vec<u32>,
}

/// Parse, validate and emit one WGSL source.
///
/// `name` only labels diagnostics.
pub fn compile_source(
    name: &str,
    source: &str,
    defs: &ShaderDefs,
) -> Result<CompiledShader, ShaderError> {
    let full_source = format!("{source}{}", defs.to_wgsl());

    let module = naga::front::wgsl::parse_str(&full_source).map_err(|e| ShaderError::Parse {
        name: name.to_string(),
        message: e.emit_to_string(&full_source),
    })?;

    let info = Validator::new(ValidationFlags::all(), Capabilities::PUSH_CONSTANT)
        .validate(&module)
        .map_err(|e| ShaderError::Validation {
            name: name.to_string(),
            message: e.emit_to_string(&full_source),
        })?;

    // The binary is consumed by wgpu, which applies its own per-backend
    // coordinate conventions. Keep WGSL's.
    let mut options = spv::Options::default();
    options.flags.remove(spv::WriterFlags::ADJUST_COORDINATE_SPACE);

    let spirv = spv::write_vec(&module, &info, &options, None).map_err(|e| ShaderError::Emit {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    Ok(CompiledShader {
        module,
        info,
        spirv,
    })
}

/// Compile one file and write `<stem>.spv` next to it. Returns the output path.
pub fn compile_file(path: &Path, defs: &ShaderDefs) -> Result<PathBuf, ShaderError> {
    let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let start = std::time::Instant::now();
    let compiled = compile_source(&name, &source, defs)?;

    let out_path = path.with_extension(OUTPUT_EXTENSION);
    std::fs::write(&out_path, spirv_to_bytes(&compiled.spirv)).map_err(|source| {
        ShaderError::Io {
            path: out_path.clone(),
            source,
        }
    })?;

    tracing::info!(
        shader = %name,
        words = compiled.spirv.len(),
        "compiled in {:.2?}",
        start.elapsed()
    );
    Ok(out_path)
}

/// Compile every WGSL source directly inside `dir`, in name order.
///
/// Stops at the first failure.
pub fn compile_dir(dir: &Path, defs: &ShaderDefs) -> Result<Vec<PathBuf>, ShaderError> {
    let sources = find_sources(dir)?;
    if sources.is_empty() {
        tracing::warn!("no .{SOURCE_EXTENSION} files in {}", dir.display());
    }

    sources.iter().map(|path| compile_file(path, defs)).collect()
}

/// Sorted list of `*.wgsl` files directly inside `dir`.
pub fn find_sources(dir: &Path) -> Result<Vec<PathBuf>, ShaderError> {
    let io_err = |source| ShaderError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Serialize SPIR-V words as little-endian bytes.
pub fn spirv_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

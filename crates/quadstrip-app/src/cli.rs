use std::path::PathBuf;

use clap::Parser;
use quadstrip_config::DEFAULT_CONFIG_FILE;

/// quadstrip: an instanced strip of quads drawn with one draw call.
#[derive(Parser, Debug)]
#[command(name = "quadstrip", version, about)]
pub struct Args {
    /// Config file path.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Inspect a simple pendulum: right-click the pivot, rod or bob to see where it is
#[derive(Debug, Parser)]
#[command(name = "pendulum-simulator", version, long_about = None)]
pub struct Cli {
    /// TOML file overriding the built-in defaults
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Frame rate limit
    #[arg(long)]
    pub fps: Option<u32>,

    /// Show the inspector overlay
    #[arg(long)]
    pub overlay: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Command line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(fps) = self.fps {
            config.window.fps = fps;
        }

        if self.overlay {
            config.overlay = true;
        }

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

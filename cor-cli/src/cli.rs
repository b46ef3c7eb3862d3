//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use debug_toolkit::DebugConfig;

#[derive(Parser, Debug)]
#[command(name = "cor")]
#[command(about = "Chain-of-responsibility demos: debug messages and quest state")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append tracing output to this file.
    #[arg(long, global = true)]
    pub trace_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Log a general message, a state save and an absent message through the debug pipeline.
    Debug {
        /// Overrides DEBUG_LOG_FILE.
        #[arg(short, long)]
        log_file: Option<String>,
        /// Overrides STATE_DIR.
        #[arg(short, long)]
        state_dir: Option<String>,
    },
    /// Register a quest and drive it through start → complete → fail.
    Quest {
        #[arg(short, long, default_value = "Find the treasure")]
        name: String,
    },
}

/// Load DebugConfig from environment; CLI values override DEBUG_LOG_FILE / STATE_DIR.
pub fn load_debug_config(
    log_file: Option<String>,
    state_dir: Option<String>,
) -> Result<DebugConfig> {
    let config = DebugConfig::load(log_file)?;
    Ok(match state_dir {
        Some(dir) => config.with_state_dir(dir),
        None => config,
    })
}

//! # cor-cli
//!
//! Demo drivers for the two pipelines plus argument parsing and config loading.

pub mod cli;
pub mod demo;

pub use cli::{load_debug_config, Cli, Commands};
pub use demo::{run_debug_demo, run_quest_demo, PlayerData, Position};

//! cor CLI: replay the debug-message and quest-state demos. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use cor_cli::{load_debug_config, run_debug_demo, run_quest_demo, Cli, Commands};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cor_core::init_tracing(cli.trace_file.as_deref())?;

    match cli.command {
        Commands::Debug {
            log_file,
            state_dir,
        } => {
            let config = load_debug_config(log_file, state_dir)?;
            run_debug_demo(&config)
        }
        Commands::Quest { name } => {
            let state = run_quest_demo(&name)?;
            println!("Quest '{}' final state: {}", name, state);
            Ok(())
        }
    }
}

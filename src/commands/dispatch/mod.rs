//! Command dispatch logic for algotrace

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use algotrace_core::config::EngineConfig;
use algotrace_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(
    cli: &Cli,
    config: EngineConfig,
    config_source: Option<PathBuf>,
    start: Instant,
) -> Result<()> {
    debug!(
        elapsed = ?start.elapsed(),
        config = ?config_source.as_deref().map(|p| p.display().to_string()),
        "resolve_config"
    );

    let ctx = CommandContext::new(cli, config, config_source, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

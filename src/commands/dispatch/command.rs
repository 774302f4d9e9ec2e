//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::human::Playback;
use algotrace_core::config::EngineConfig;
use algotrace_core::error::Result;

/// Shared context for command execution: parsed flags plus the loaded config
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub config_source: Option<PathBuf>,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: EngineConfig,
        config_source: Option<PathBuf>,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            config_source,
            start,
        }
    }

    /// `--format` wins over `[output] format`
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Step playback settings for human output
    pub fn playback(&self) -> Playback {
        let delay_ms = self.cli.delay_ms.unwrap_or(self.config.playback.delay_ms);
        Playback {
            show_snapshots: self.config.output.show_snapshots && !self.cli.no_snapshots,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("algotrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step traces of MST, shortest-path and sorting algorithms.");
        println!();
        println!("Run `algotrace --help` for usage information.");
        Ok(())
    }
}

//! Command implementations for all algotrace commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{algorithms, mst, path, sort};
use algotrace_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Mst(args) => mst::execute(ctx, args),
            Commands::Path(args) => path::execute(ctx, args),
            Commands::Sort(args) => sort::execute(ctx, args),
            Commands::Algorithms => algorithms::execute(ctx),
        }
    }
}

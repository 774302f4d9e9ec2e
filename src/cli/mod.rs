//! CLI argument parsing for algotrace
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level,
//! --log-json, --no-snapshots, --delay-ms

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{MstArgs, PathArgs, SortArgs};
pub use algotrace_core::format::OutputFormat;
use parse::parse_output_format;

/// Algotrace - step-by-step traces of classic graph and sorting algorithms
#[derive(Parser, Debug)]
#[command(name = "algotrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, records (overrides `[output] format` in the config file)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Configuration file (default: ./algotrace.toml, then the global config)
    #[arg(long, global = true, env = "ALGOTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging for the algotrace crates
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Omit per-step state from human output
    #[arg(long, global = true)]
    pub no_snapshots: bool,

    /// Pause between steps in human output, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level algotrace commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a minimum spanning tree (Kruskal or Prim)
    Mst(MstArgs),

    /// Single-source shortest paths (Dijkstra)
    Path(PathArgs),

    /// Sort numbers and trace every comparison and move
    Sort(SortArgs),

    /// List supported algorithms
    Algorithms,
}

//! CLI argument parsing for gka
//!
//! Supports global flags: --root, --dir, --file, --config, --format, --quiet, --verbose

pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use gka_core::format::OutputFormat;
use parse::parse_output_format;

/// gka - graph description language parser and shortest-path finder
#[derive(Parser, Debug)]
#[command(name = "gka")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the graphs directory and gka.toml
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Directory to scan for sources (overrides graphs_dir from gka.toml)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Parse this source file instead of scanning a directory (repeatable)
    #[arg(long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Explicit configuration file
    #[arg(long, global = true, env = "GKA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "info", "gka_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the graphs parsed from all sources
    List,

    /// Parse all sources and report per-source diagnostics
    Parse,

    /// Show the nodes and edges of a graph
    Show {
        /// Graph index as printed by `gka list` (starting at 1)
        index: usize,
    },

    /// Find the shortest path between two nodes of a graph
    Path {
        /// Graph index as printed by `gka list` (starting at 1)
        index: usize,

        /// Start node id
        from: String,

        /// Target node id
        to: String,
    },
}

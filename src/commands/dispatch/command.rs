//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use gka_core::config::GkaConfig;
use gka_core::discovery::discover_sources;
use gka_core::error::{GraphError, Result};
use gka_core::graph::{Graph, GraphRegistry};
use gka_core::parser::{BatchReport, DescriptionParser};
use gka_core::{bail_usage, trace_time};

/// Graphs parsed for one command run, with the diagnostics of the parse
pub struct Loaded {
    pub registry: GraphRegistry,
    pub report: BatchReport,
}

impl Loaded {
    /// Select a graph by its user-facing index (starting at 1)
    pub fn select(&self, index: usize) -> Result<&Graph> {
        index
            .checked_sub(1)
            .and_then(|i| self.registry.get(i))
            .ok_or(GraphError::GraphIndexOutOfRange {
                index,
                count: self.registry.len(),
            })
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Configuration from --config, else `gka.toml` in the root, else defaults
    pub fn config(&self) -> Result<GkaConfig> {
        match &self.cli.config {
            Some(path) => GkaConfig::load(&resolve_against(self.root, path)),
            None => GkaConfig::load_or_default(self.root),
        }
    }

    /// Source files to parse: explicit --file arguments, or a directory scan
    pub fn source_files(&self, config: &GkaConfig) -> Result<Vec<PathBuf>> {
        if self.cli.dir.is_some() && !self.cli.files.is_empty() {
            bail_usage!("--dir and --file cannot be combined");
        }
        if !self.cli.files.is_empty() {
            return Ok(self
                .cli
                .files
                .iter()
                .map(|f| resolve_against(self.root, f))
                .collect());
        }

        let dir = match &self.cli.dir {
            Some(dir) => resolve_against(self.root, dir),
            None => config.graphs_dir_in(self.root),
        };
        discover_sources(&dir, config)
    }

    /// Discover and parse every source into a fresh registry
    pub fn load(&self) -> Result<Loaded> {
        let config = self.config()?;
        let files = self.source_files(&config)?;
        trace_time!(self.start, "discover", files = files.len());

        let parser = DescriptionParser::new()?;
        let mut registry = GraphRegistry::new();
        let report = parser.parse_files(&mut registry, &files);
        trace_time!(self.start, "parse", graphs = registry.len());

        Ok(Loaded { registry, report })
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
        println!("gka {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Parse graph description files and find shortest paths.");
        println!();
        println!("Run `gka --help` for usage information.");
        Ok(())
    }
}

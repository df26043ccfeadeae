//! Description-language parser and graph builder
//!
//! Each source becomes one [`Graph`]. Lines are matched independently: a
//! line that does not fit the grammar is skipped, a duplicate edge is
//! reported and ignored, and neither stops the rest of the source. A graph
//! is appended to the registry only when at least one node was created.

pub mod grammar;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphRegistry};
use crate::trace_time;

pub use grammar::{parse_weight, ParsedLine};

/// A named unit of description-language text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a file; the source is named after the file name.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a bad byte only
    /// spoils the line it sits on.
    pub fn read(path: &Path) -> Result<Self> {
        let name = source_name(path);
        let bytes = fs::read(path).map_err(|e| GraphError::unreadable(&name, e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self { name, text })
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Outcome of parsing one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub name: String,
    pub graph_id: String,
    pub lines: usize,
    pub matched_lines: usize,
    pub skipped_lines: usize,
    pub duplicate_edges: usize,
    /// Registry index, if the graph was appended
    pub graph_index: Option<usize>,
}

impl SourceReport {
    /// No line of the source matched the grammar
    pub fn invalid_content(&self) -> bool {
        self.matched_lines == 0
    }
}

/// A source skipped because it could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableSource {
    pub name: String,
    pub reason: String,
}

/// Outcome of parsing a batch of sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub sources: Vec<SourceReport>,
    pub unreadable: Vec<UnreadableSource>,
}

impl BatchReport {
    /// Number of graphs appended to the registry by this batch
    pub fn graphs_added(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| s.graph_index.is_some())
            .count()
    }
}

/// Parser for the line-oriented graph description language
#[derive(Debug, Clone)]
pub struct DescriptionParser {
    pattern: Regex,
}

impl DescriptionParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: grammar::compile()?,
        })
    }

    /// Match a single line against the grammar
    pub fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        grammar::match_line(&self.pattern, line.trim())
    }

    /// Parse sources in order, appending each non-empty graph to `registry`
    #[tracing::instrument(skip_all)]
    pub fn parse_batch<I>(&self, registry: &mut GraphRegistry, sources: I) -> BatchReport
    where
        I: IntoIterator<Item = Source>,
    {
        let start = Instant::now();
        let mut report = BatchReport::default();
        for source in sources {
            report
                .sources
                .push(self.parse_source(registry, &source.name, &source.text));
        }
        trace_time!(start, "parse_batch", sources = report.sources.len());
        report
    }

    /// Read and parse files one at a time; unreadable files are skipped
    #[tracing::instrument(skip_all, fields(files = paths.len()))]
    pub fn parse_files(&self, registry: &mut GraphRegistry, paths: &[PathBuf]) -> BatchReport {
        let start = Instant::now();
        let mut report = BatchReport::default();
        for path in paths {
            match Source::read(path) {
                Ok(source) => report
                    .sources
                    .push(self.parse_source(registry, &source.name, &source.text)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable source");
                    report.unreadable.push(UnreadableSource {
                        name: source_name(path),
                        reason: e.to_string(),
                    });
                }
            }
        }
        trace_time!(start, "parse_files", sources = report.sources.len());
        report
    }

    /// Build one graph from `text`, tagged with `name`
    pub fn parse_source(&self, registry: &mut GraphRegistry, name: &str, text: &str) -> SourceReport {
        let mut graph = registry.create_graph(name);
        let mut report = SourceReport {
            name: name.to_string(),
            graph_id: graph.id().to_string(),
            ..Default::default()
        };

        for (i, raw) in text.lines().enumerate() {
            report.lines += 1;
            match self.parse_line(raw) {
                Some(parsed) => {
                    report.matched_lines += 1;
                    if !self.apply(&mut graph, &parsed) {
                        report.duplicate_edges += 1;
                    }
                }
                None => {
                    report.skipped_lines += 1;
                    let skipped = GraphError::UnparsableLine {
                        source_name: name.to_string(),
                        line_no: i + 1,
                        content: raw.to_string(),
                    };
                    trace!(error = %skipped, "skipping line");
                }
            }
        }

        if report.invalid_content() {
            warn!(source = name, "invalid file content: no parsable information detected");
        }

        if graph.is_empty() {
            debug!(source = name, graph = graph.id(), "empty graph not registered");
        } else {
            report.graph_index = Some(registry.append(graph));
        }
        report
    }

    /// Add the line's edge to `graph`; false if it was a duplicate
    fn apply(&self, graph: &mut Graph, parsed: &ParsedLine) -> bool {
        debug!(
            source = %parsed.source,
            direction = %parsed.direction,
            target = %parsed.target,
            label = parsed.label.as_deref(),
            weight = parsed.weight,
            "parsed"
        );

        match graph.add_edge(
            &parsed.source,
            &parsed.target,
            parsed.direction,
            parsed.label.as_deref(),
            parsed.weight,
        ) {
            Ok(_) => true,
            Err(e) => {
                info!(graph = graph.id(), error = %e, "edge ignored");
                false
            }
        }
    }
}

//! gka Core Library
//!
//! Builds in-memory graphs from the line-oriented graph description language
//! and answers unweighted shortest-path queries over them.

pub mod config;
pub mod discovery;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod parser;
pub mod path;

pub use error::{GraphError, Result};
pub use graph::{Direction, Graph, GraphRegistry};
pub use parser::{DescriptionParser, Source};
pub use path::PathFinder;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::model::Graph;
use crate::path::PathFinder;

/// Registry entry as shown to collaborators selecting a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Zero-based position in the registry
    pub index: usize,
    pub id: String,
    pub source_file: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Append-only, ordered collection of parsed graphs.
///
/// Owns the graph id counter, so ids are unique for the registry's lifetime.
#[derive(Debug)]
pub struct GraphRegistry {
    graphs: Vec<Graph>,
    next_graph_id: u64,
}

impl Default for GraphRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self {
            graphs: Vec::new(),
            next_graph_id: 1,
        }
    }

    /// Allocate a new, empty graph tagged with `source_tag`.
    ///
    /// The graph is not appended; see [`GraphRegistry::append`].
    pub fn create_graph(&mut self, source_tag: &str) -> Graph {
        let id = format!("graph:{}", self.next_graph_id);
        self.next_graph_id += 1;
        Graph::new(id, source_tag)
    }

    /// Append a graph, returning its index
    pub fn append(&mut self, graph: Graph) -> usize {
        self.graphs.push(graph);
        self.graphs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn get(&self, index: usize) -> Option<&Graph> {
        self.graphs.get(index)
    }

    /// Like [`GraphRegistry::get`], but a missing index is an error
    pub fn select(&self, index: usize) -> Result<&Graph> {
        self.graphs
            .get(index)
            .ok_or(GraphError::GraphIndexOutOfRange {
                index,
                count: self.graphs.len(),
            })
    }

    pub fn list_graphs(&self) -> Vec<GraphSummary> {
        self.graphs
            .iter()
            .enumerate()
            .map(|(index, graph)| GraphSummary {
                index,
                id: graph.id().to_string(),
                source_file: graph.source_file().to_string(),
                node_count: graph.node_count(),
                edge_count: graph.edge_count(),
            })
            .collect()
    }

    /// Shortest hop-count path between two node ids of the selected graph.
    ///
    /// An empty result means the target is unreachable.
    #[tracing::instrument(skip(self), fields(from = %from, to = %to))]
    pub fn shortest_path(&self, index: usize, from: &str, to: &str) -> Result<Vec<String>> {
        let graph = self.select(index)?;
        let mut finder = PathFinder::new(from, to);
        finder.bind(Some(graph))?;
        finder.compute()?;
        Ok(finder.path_ids())
    }
}

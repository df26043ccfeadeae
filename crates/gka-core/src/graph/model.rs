//! Graph entity store: nodes, edges and their attributes
//!
//! A [`Graph`] owns every [`Node`] and [`Edge`] in index-stable vectors.
//! Edges refer to their endpoints by [`NodeIdx`], never by reference.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Handle to a node inside its owning [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeIdx(usize);

impl NodeIdx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to an edge inside its owning [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeIdx(usize);

impl EdgeIdx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Edge kind, written `->` (directed) or `--` (undirected)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub const DIRECTED_TOKEN: &'static str = "->";
    pub const UNDIRECTED_TOKEN: &'static str = "--";

    /// Map a direction token to its kind; any other text is not a direction
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            Self::DIRECTED_TOKEN => Some(Direction::Directed),
            Self::UNDIRECTED_TOKEN => Some(Direction::Undirected),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::Directed => Self::DIRECTED_TOKEN,
            Direction::Undirected => Self::UNDIRECTED_TOKEN,
        }
    }

    pub fn is_directed(self) -> bool {
        self == Direction::Directed
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Canonical edge identifier: `source + token + target`
pub fn edge_id(source: &str, direction: Direction, target: &str) -> String {
    format!("{}{}{}", source, direction.token(), target)
}

/// A vertex, created on first mention and never removed
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    id: String,
    label: String,
    #[serde(skip)]
    incidence: Vec<EdgeIdx>,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label (equal to the id)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Edges touching this node, in the order they were recorded
    pub fn incidence(&self) -> &[EdgeIdx] {
        &self.incidence
    }

    pub fn degree(&self) -> usize {
        self.incidence.len()
    }
}

/// A directed or undirected connection between two nodes of the same graph
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    id: String,
    source: NodeIdx,
    target: NodeIdx,
    direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Edge {
    /// Canonical identifier, also used as the display label
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> NodeIdx {
        self.source
    }

    pub fn target(&self) -> NodeIdx {
        self.target
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    pub fn weight(&self) -> Option<i64> {
        self.weight
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The endpoint across from `node`, or `None` if `node` is not an endpoint
    pub fn opposite(&self, node: NodeIdx) -> Option<NodeIdx> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

/// A graph built from one description-language source
///
/// Append-only while parsing, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    id: String,
    source_file: String,
    nodes: Vec<Node>,
    node_index: HashMap<String, NodeIdx>,
    edges: Vec<Edge>,
    edge_index: HashMap<String, EdgeIdx>,
}

impl Graph {
    /// Graphs are allocated through [`crate::graph::GraphRegistry::create_graph`],
    /// which owns the id counter.
    pub(crate) fn new(id: String, source_file: impl Into<String>) -> Self {
        Self {
            id,
            source_file: source_file.into(),
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Identifier of the form `graph:<n>`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the source this graph was parsed from
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge_index.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.0]
    }

    pub fn edge(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx.0]
    }

    pub fn node_idx(&self, id: &str) -> Option<NodeIdx> {
        self.node_index.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.node_idx(id).map(|idx| self.node(idx))
    }

    pub fn edge_by_id(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|&idx| self.edge(idx))
    }

    /// Edges touching `node`, in incidence order
    pub fn incident_edges(&self, node: NodeIdx) -> impl Iterator<Item = &Edge> + '_ {
        self.node(node).incidence.iter().map(move |&e| self.edge(e))
    }

    /// Create a node unless one with this id exists; returns its handle either way
    pub fn add_node_if_absent(&mut self, id: &str) -> NodeIdx {
        if let Some(idx) = self.node_idx(id) {
            return idx;
        }
        let idx = NodeIdx(self.nodes.len());
        self.nodes.push(Node {
            id: id.to_string(),
            label: id.to_string(),
            incidence: Vec::new(),
        });
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    /// Add an edge, creating missing endpoints first.
    ///
    /// Undirected edges are checked against both `source--target` and
    /// `target--source`; directed edges only against their forward id, so
    /// `A->B` and `B->A` coexist. A rejected duplicate leaves the graph
    /// untouched and returns [`GraphError::DuplicateEdge`].
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        direction: Direction,
        label: Option<&str>,
        weight: Option<i64>,
    ) -> Result<EdgeIdx> {
        let id = edge_id(source, direction, target);
        if self.contains_edge(&id) {
            return Err(GraphError::DuplicateEdge { id });
        }
        if direction == Direction::Undirected {
            let reversed = edge_id(target, direction, source);
            if self.contains_edge(&reversed) {
                return Err(GraphError::DuplicateEdge { id: reversed });
            }
        }

        let source_idx = self.add_node_if_absent(source);
        let target_idx = self.add_node_if_absent(target);

        let idx = EdgeIdx(self.edges.len());
        self.edges.push(Edge {
            id: id.clone(),
            source: source_idx,
            target: target_idx,
            direction,
            weight,
            label: label.map(str::to_string),
        });
        self.edge_index.insert(id, idx);

        self.nodes[source_idx.0].incidence.push(idx);
        if target_idx != source_idx {
            self.nodes[target_idx.0].incidence.push(idx);
        }

        Ok(idx)
    }
}

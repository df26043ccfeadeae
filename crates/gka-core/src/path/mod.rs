//! Unweighted shortest-path search (BFS) over a parsed graph
//!
//! Directed edges are followed from source to target only; undirected edges
//! in both directions. Among equally short paths the one discovered first in
//! incidence order wins.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::{Direction, Graph, Node, NodeIdx};
use crate::trace_time;

/// Lifecycle of a [`PathFinder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No graph bound yet
    Uninitialized,
    /// Graph bound, no search run since
    Ready,
    /// A search ran to completion (path found or frontier exhausted)
    Computed,
}

/// Nodes reachable from `node` over a single edge, without repeats.
///
/// Order follows the node's incidence list.
///
/// # Panics
///
/// Panics if `node` is not a handle of `graph`. [`PathFinder::neighbors`]
/// checks the handle first.
pub fn neighbors(graph: &Graph, node: NodeIdx) -> Vec<NodeIdx> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for edge in graph.incident_edges(node) {
        let neighbor = match edge.direction() {
            Direction::Directed if edge.source() == node => Some(edge.target()),
            Direction::Directed => None,
            Direction::Undirected => edge.opposite(node),
        };
        if let Some(n) = neighbor {
            // multigraphs may connect the same pair more than once
            if seen.insert(n) {
                result.push(n);
            }
        }
    }

    result
}

/// BFS from `source`, stopping as soon as `target` is dequeued
fn bfs_search(graph: &Graph, source: NodeIdx, target: NodeIdx) -> Vec<NodeIdx> {
    let mut queue: VecDeque<NodeIdx> = VecDeque::new();
    let mut visited: HashSet<NodeIdx> = HashSet::new();
    let mut parent: HashMap<NodeIdx, NodeIdx> = HashMap::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return reconstruct_path(&parent, target);
        }

        for neighbor in neighbors(graph, current) {
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    Vec::new()
}

/// Walk parent links back from `target` and reverse
fn reconstruct_path(parent: &HashMap<NodeIdx, NodeIdx>, target: NodeIdx) -> Vec<NodeIdx> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&prev) = parent.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Shortest-path query between two node ids.
///
/// ```rust,ignore
/// let mut finder = PathFinder::new("A", "C");
/// finder.bind(Some(&graph))?;
/// finder.compute()?;
/// let ids = finder.path_ids();
/// ```
#[derive(Debug)]
pub struct PathFinder<'g> {
    source_id: String,
    target_id: String,
    graph: Option<&'g Graph>,
    state: EngineState,
    path: Vec<NodeIdx>,
}

impl<'g> PathFinder<'g> {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            graph: None,
            state: EngineState::Uninitialized,
            path: Vec::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Bind the graph to search. Rebinding discards any previous result.
    pub fn bind(&mut self, graph: Option<&'g Graph>) -> Result<()> {
        let graph = graph.ok_or(GraphError::InvalidGraph)?;
        self.graph = Some(graph);
        self.state = EngineState::Ready;
        self.path.clear();
        Ok(())
    }

    /// Neighbor set of `node` in the bound graph.
    ///
    /// A handle from another graph that is out of range here is `NodeNotFound`.
    pub fn neighbors(&self, node: NodeIdx) -> Result<Vec<NodeIdx>> {
        let graph = self.graph.ok_or(GraphError::UninitializedEngine)?;
        if node.index() >= graph.node_count() {
            return Err(GraphError::node_not_found(&format!("#{}", node.index())));
        }
        Ok(neighbors(graph, node))
    }

    /// Run the search. An unreachable target leaves an empty path and is not an error.
    #[tracing::instrument(skip(self), fields(from = %self.source_id, to = %self.target_id))]
    pub fn compute(&mut self) -> Result<()> {
        let graph = self.graph.ok_or(GraphError::UninitializedEngine)?;
        let source = graph
            .node_idx(&self.source_id)
            .ok_or_else(|| GraphError::node_not_found(&self.source_id))?;
        let target = graph
            .node_idx(&self.target_id)
            .ok_or_else(|| GraphError::node_not_found(&self.target_id))?;

        let start = Instant::now();
        self.path = bfs_search(graph, source, target);
        self.state = EngineState::Computed;
        trace_time!(start, "bfs_compute", hops = self.hop_count());

        tracing::debug!(
            graph = graph.id(),
            found = !self.path.is_empty(),
            length = self.path.len(),
            "path computed"
        );
        Ok(())
    }

    /// Last computed path as node handles; empty before `compute` or if none exists
    pub fn path_indices(&self) -> &[NodeIdx] {
        &self.path
    }

    /// Last computed path as nodes of the bound graph
    pub fn path(&self) -> Vec<&'g Node> {
        match self.graph {
            Some(graph) => self.path.iter().map(|&idx| graph.node(idx)).collect(),
            None => Vec::new(),
        }
    }

    pub fn path_ids(&self) -> Vec<String> {
        self.path().iter().map(|n| n.id().to_string()).collect()
    }

    /// Number of edges on the last computed path
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests;

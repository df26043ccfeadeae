//! Read-only, serializable projection of a graph for renderers and output

use serde::Serialize;

use crate::graph::model::{Direction, Graph};

#[derive(Debug, Clone, Serialize)]
pub struct NodeView<'a> {
    pub id: &'a str,
    pub label: &'a str,
}

/// Edge with endpoints resolved to node ids
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView<'a> {
    pub id: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphView<'a> {
    pub id: &'a str,
    pub source_file: &'a str,
    pub nodes: Vec<NodeView<'a>>,
    pub edges: Vec<EdgeView<'a>>,
}

impl<'a> GraphView<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|n| NodeView {
                id: n.id(),
                label: n.label(),
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|e| EdgeView {
                id: e.id(),
                source: graph.node(e.source()).id(),
                target: graph.node(e.target()).id(),
                direction: e.direction(),
                weight: e.weight(),
                label: e.label(),
            })
            .collect();

        GraphView {
            id: graph.id(),
            source_file: graph.source_file(),
            nodes,
            edges,
        }
    }
}

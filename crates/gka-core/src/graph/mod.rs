//! In-memory graph model and the registry of parsed graphs
//!
//! - `model`: nodes, edges, attributes and duplicate-edge canonicalization
//! - `registry`: append-only collection of graphs, one per parsed source
//! - `view`: serializable read-only projection for renderers

pub mod model;
pub mod registry;
pub mod view;

pub use model::{edge_id, Direction, Edge, EdgeIdx, Graph, Node, NodeIdx};
pub use registry::{GraphRegistry, GraphSummary};
pub use view::{EdgeView, GraphView, NodeView};

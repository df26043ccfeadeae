use crate::error::GraphError;
use crate::graph::{Direction, Graph, GraphRegistry};
use crate::path::*;

fn build(edges: &[(&str, &str, Direction)]) -> Graph {
    let mut g = GraphRegistry::new().create_graph("test.gka");
    for (s, t, d) in edges {
        g.add_edge(s, t, *d, None, None).unwrap();
    }
    g
}

/// A - B - C - D
fn undirected_line() -> Graph {
    build(&[
        ("A", "B", Direction::Undirected),
        ("B", "C", Direction::Undirected),
        ("C", "D", Direction::Undirected),
    ])
}

/// Two equally short routes S-A-T and S-B-T
fn diamond() -> Graph {
    build(&[
        ("S", "A", Direction::Undirected),
        ("S", "B", Direction::Undirected),
        ("A", "T", Direction::Undirected),
        ("B", "T", Direction::Undirected),
        ("A", "B", Direction::Undirected),
    ])
}

/// A -> B <- C
fn directed() -> Graph {
    build(&[
        ("A", "B", Direction::Directed),
        ("C", "B", Direction::Directed),
    ])
}

fn ids(g: &Graph, nodes: &[NodeIdx]) -> Vec<String> {
    nodes.iter().map(|&n| g.node(n).id().to_string()).collect()
}

#[test]
fn test_finds_shortest_on_line() {
    let g = undirected_line();
    let mut bfs = PathFinder::new("A", "D");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();

    assert_eq!(bfs.path_ids(), vec!["A", "B", "C", "D"]);
    assert_eq!(bfs.hop_count(), 3);
}

#[test]
fn test_uses_a_shortest_route() {
    let g = diamond();
    let mut bfs = PathFinder::new("S", "T");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();

    let path = bfs.path_ids();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], "S");
    assert_eq!(path[2], "T");
    // S-A was recorded before S-B, so A is discovered first
    assert_eq!(path[1], "A");
}

#[test]
fn test_directed_edge_followed_forward() {
    let g = directed();
    let mut bfs = PathFinder::new("A", "B");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();
    assert_eq!(bfs.path_ids(), vec!["A", "B"]);
}

#[test]
fn test_directed_edge_not_followed_backward() {
    let g = directed();
    let mut bfs = PathFinder::new("B", "A");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();

    assert!(bfs.path().is_empty());
    assert_eq!(bfs.state(), EngineState::Computed);
}

#[test]
fn test_directed_chain_is_asymmetric() {
    let g = build(&[
        ("A", "B", Direction::Directed),
        ("B", "C", Direction::Directed),
    ]);

    let mut forward = PathFinder::new("A", "C");
    forward.bind(Some(&g)).unwrap();
    forward.compute().unwrap();
    assert_eq!(forward.path_ids(), vec!["A", "B", "C"]);

    let mut backward = PathFinder::new("C", "A");
    backward.bind(Some(&g)).unwrap();
    backward.compute().unwrap();
    assert!(backward.path_ids().is_empty());
}

#[test]
fn test_undirected_edge_usable_from_either_end() {
    let g = build(&[("A", "B", Direction::Undirected)]);
    let mut bfs = PathFinder::new("B", "A");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();
    assert_eq!(bfs.path_ids(), vec!["B", "A"]);
}

#[test]
fn test_path_to_self() {
    let g = undirected_line();
    let mut bfs = PathFinder::new("C", "C");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();
    assert_eq!(bfs.path_ids(), vec!["C"]);
    assert_eq!(bfs.hop_count(), 0);
}

#[test]
fn test_neighbors_undirected() {
    let g = undirected_line();
    let mut bfs = PathFinder::new("A", "D");
    bfs.bind(Some(&g)).unwrap();

    let b = g.node_idx("B").unwrap();
    let neighbors = ids(&g, &bfs.neighbors(b).unwrap());
    assert_eq!(neighbors, vec!["A", "C"]);
}

#[test]
fn test_neighbors_undirected_symmetric() {
    let g = diamond();
    for x in g.nodes() {
        let xi = g.node_idx(x.id()).unwrap();
        for &yi in &neighbors(&g, xi) {
            assert!(
                neighbors(&g, yi).contains(&xi),
                "{} is a neighbor of {} but not vice versa",
                g.node(yi).id(),
                x.id()
            );
        }
    }
}

#[test]
fn test_neighbors_directed() {
    let g = directed();
    let a = g.node_idx("A").unwrap();
    let b = g.node_idx("B").unwrap();

    assert_eq!(ids(&g, &neighbors(&g, a)), vec!["B"]);
    assert!(neighbors(&g, b).is_empty());
}

#[test]
fn test_neighbors_deduplicated_in_multigraph() {
    let g = build(&[
        ("A", "B", Direction::Directed),
        ("A", "B", Direction::Undirected),
        ("B", "A", Direction::Directed),
    ]);
    let a = g.node_idx("A").unwrap();
    let b = g.node_idx("B").unwrap();

    assert_eq!(neighbors(&g, a), vec![b]);
    assert_eq!(neighbors(&g, b), vec![a]);
}

#[test]
fn test_compute_without_graph() {
    let mut bfs = PathFinder::new("A", "B");
    assert_eq!(bfs.state(), EngineState::Uninitialized);
    assert!(matches!(bfs.compute(), Err(GraphError::UninitializedEngine)));
    assert!(bfs.path().is_empty());
}

#[test]
fn test_neighbors_without_graph() {
    let g = directed();
    let bfs = PathFinder::new("A", "B");
    let a = g.node_idx("A").unwrap();
    assert!(matches!(bfs.neighbors(a), Err(GraphError::UninitializedEngine)));
}

#[test]
fn test_bind_absent_graph() {
    let mut bfs = PathFinder::new("A", "B");
    assert!(matches!(bfs.bind(None), Err(GraphError::InvalidGraph)));
    assert_eq!(bfs.state(), EngineState::Uninitialized);
}

#[test]
fn test_unknown_endpoint() {
    let g = directed();

    let mut bfs = PathFinder::new("A", "Z");
    bfs.bind(Some(&g)).unwrap();
    match bfs.compute() {
        Err(GraphError::NodeNotFound { id }) => assert_eq!(id, "Z"),
        other => panic!("expected NodeNotFound, got {:?}", other),
    }
    assert_eq!(bfs.state(), EngineState::Ready);

    let mut bfs = PathFinder::new("Q", "A");
    bfs.bind(Some(&g)).unwrap();
    assert!(matches!(bfs.compute(), Err(GraphError::NodeNotFound { .. })));
}

#[test]
fn test_rebind_resets_path() {
    let line = undirected_line();
    let other = directed();

    let mut bfs = PathFinder::new("A", "B");
    bfs.bind(Some(&line)).unwrap();
    bfs.compute().unwrap();
    assert_eq!(bfs.path_ids(), vec!["A", "B"]);

    bfs.bind(Some(&other)).unwrap();
    assert_eq!(bfs.state(), EngineState::Ready);
    assert!(bfs.path().is_empty());
}

#[test]
fn test_path_length_matches_edges() {
    let g = build(&[
        ("A", "B", Direction::Undirected),
        ("B", "C", Direction::Directed),
        ("C", "D", Direction::Undirected),
        ("A", "E", Direction::Directed),
        ("E", "D", Direction::Directed),
    ]);
    let mut bfs = PathFinder::new("A", "D");
    bfs.bind(Some(&g)).unwrap();
    bfs.compute().unwrap();

    let path = bfs.path_indices();
    assert_eq!(path.len(), 3);
    assert_eq!(g.node(path[0]).id(), "A");
    assert_eq!(g.node(path[path.len() - 1]).id(), "D");
    for pair in path.windows(2) {
        assert!(neighbors(&g, pair[0]).contains(&pair[1]));
    }
}

#[test]
fn test_neighbors_rejects_foreign_handle() {
    let big = undirected_line();
    let small = build(&[("A", "B", Direction::Undirected)]);
    let d = big.node_idx("D").unwrap();

    let mut bfs = PathFinder::new("A", "B");
    bfs.bind(Some(&small)).unwrap();
    assert!(matches!(
        bfs.neighbors(d),
        Err(GraphError::NodeNotFound { .. })
    ));
}

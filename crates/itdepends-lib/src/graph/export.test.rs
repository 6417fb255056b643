// Tests for the graph export view

use super::*;
use crate::graph::DependencyGraph;
use crate::primitives::{Identity, ProjectRecord};
use std::path::Path;

fn id(path: &str) -> Identity {
    Identity::canonicalize(Path::new(path))
}

fn sample_graph() -> DependencyGraph {
    // Entry is deliberately not first lexicographically.
    let mut graph = DependencyGraph::new(id("/r/zeta.csproj"));
    for path in ["/r/zeta.csproj", "/r/alpha.csproj", "/r/mid.csproj"] {
        graph.add_node(ProjectRecord::stub(Path::new(path)));
    }
    graph.add_edge(&id("/r/zeta.csproj"), &id("/r/mid.csproj"));
    graph.add_edge(&id("/r/zeta.csproj"), &id("/r/alpha.csproj"));
    graph.add_edge(&id("/r/mid.csproj"), &id("/r/alpha.csproj"));
    graph
}

#[test]
fn entry_node_first_then_lexicographic() {
    let export = GraphExport::from_graph(&sample_graph());

    assert_eq!(export.entry, "/r/zeta.csproj");
    let ids: Vec<&str> = export.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["/r/zeta.csproj", "/r/alpha.csproj", "/r/mid.csproj"]);
}

#[test]
fn edges_sorted_by_source_then_target() {
    let export = GraphExport::from_graph(&sample_graph());

    let pairs: Vec<(&str, &str)> = export
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("/r/mid.csproj", "/r/alpha.csproj"),
            ("/r/zeta.csproj", "/r/alpha.csproj"),
            ("/r/zeta.csproj", "/r/mid.csproj"),
        ]
    );
}

#[test]
fn json_round_trips() {
    let export = GraphExport::from_graph(&sample_graph());
    let json = export.to_pretty_json().unwrap();

    let parsed: GraphExport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.entry, export.entry);
    assert_eq!(parsed.nodes.len(), 3);
    assert_eq!(parsed.edges.len(), 3);
    assert_eq!(parsed.nodes[0].label, "zeta");
}

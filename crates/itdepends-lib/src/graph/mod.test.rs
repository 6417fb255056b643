// Tests for the graph model and query surface

use super::*;
use std::path::Path;

fn id(path: &str) -> Identity {
    Identity::canonicalize(Path::new(path))
}

fn record(path: &str) -> ProjectRecord {
    ProjectRecord::stub(Path::new(path))
}

/// a -> b -> c, a -> c, d isolated
fn diamondish() -> DependencyGraph {
    let mut graph = DependencyGraph::new(id("/r/a.csproj"));
    for path in ["/r/a.csproj", "/r/b.csproj", "/r/c.csproj", "/r/d.csproj"] {
        graph.add_node(record(path));
    }
    graph.add_edge(&id("/r/a.csproj"), &id("/r/b.csproj"));
    graph.add_edge(&id("/r/b.csproj"), &id("/r/c.csproj"));
    graph.add_edge(&id("/r/a.csproj"), &id("/r/c.csproj"));
    graph
}

#[test]
fn duplicate_nodes_collapse() {
    let mut graph = DependencyGraph::new(id("/r/a.csproj"));
    let first = graph.add_node(record("/r/a.csproj"));
    let second = graph.add_node(record("/R/A.CSPROJ"));
    assert_eq!(first, second);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn duplicate_and_self_edges_are_dropped() {
    let mut graph = DependencyGraph::new(id("/r/a.csproj"));
    graph.add_node(record("/r/a.csproj"));
    graph.add_node(record("/r/b.csproj"));
    graph.add_edge(&id("/r/a.csproj"), &id("/r/b.csproj"));
    graph.add_edge(&id("/r/a.csproj"), &id("/r/b.csproj"));
    graph.add_edge(&id("/r/a.csproj"), &id("/r/a.csproj"));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn direct_dependencies_sorted_and_absent_is_empty() {
    let graph = diamondish();
    let deps = graph.direct_dependencies(&id("/r/a.csproj"));
    let names: Vec<&str> = deps.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);

    assert!(graph.direct_dependencies(&id("/r/absent.csproj")).is_empty());
}

#[test]
fn transitive_dependencies_equal_iterated_direct_dependencies() {
    let graph = diamondish();
    let start = id("/r/a.csproj");

    // Closure by repeated direct-dependency application.
    let mut closure: BTreeSet<Identity> = BTreeSet::new();
    let mut frontier = vec![start.clone()];
    while let Some(current) = frontier.pop() {
        for dep in graph.direct_dependencies(&current) {
            if closure.insert(dep.identity.clone()) {
                frontier.push(dep.identity.clone());
            }
        }
    }

    assert_eq!(graph.transitive_dependencies(&start), closure);
    assert_eq!(
        graph.transitive_dependencies(&start),
        BTreeSet::from([id("/r/b.csproj"), id("/r/c.csproj")])
    );
}

#[test]
fn transitive_dependents_reverse_reachability() {
    let graph = diamondish();
    assert_eq!(
        graph.transitive_dependents(&id("/r/c.csproj")),
        BTreeSet::from([id("/r/a.csproj"), id("/r/b.csproj")])
    );
    assert!(graph.transitive_dependents(&id("/r/a.csproj")).is_empty());
}

#[test]
fn cyclic_queries_terminate_and_exclude_start() {
    let mut graph = DependencyGraph::new(id("/r/a.csproj"));
    graph.add_node(record("/r/a.csproj"));
    graph.add_node(record("/r/b.csproj"));
    graph.add_edge(&id("/r/a.csproj"), &id("/r/b.csproj"));
    graph.add_edge(&id("/r/b.csproj"), &id("/r/a.csproj"));

    assert_eq!(
        graph.transitive_dependencies(&id("/r/a.csproj")),
        BTreeSet::from([id("/r/b.csproj")])
    );
    assert_eq!(
        graph.transitive_dependents(&id("/r/a.csproj")),
        BTreeSet::from([id("/r/b.csproj")])
    );
}

#[test]
fn induced_subgraph_is_node_and_edge_closed() {
    let graph = diamondish();
    let sub = graph.induced_subgraph(&id("/r/b.csproj")).unwrap();

    assert_eq!(sub.entry(), &id("/r/b.csproj"));
    assert_eq!(sub.node_count(), 2);
    assert_eq!(sub.edge_count(), 1);
    assert!(sub.contains(&id("/r/c.csproj")));
    assert!(!sub.contains(&id("/r/a.csproj")));
    assert!(!sub.contains(&id("/r/d.csproj")));
}

#[test]
fn induced_subgraph_of_absent_root_is_none() {
    let graph = diamondish();
    assert!(graph.induced_subgraph(&id("/r/absent.csproj")).is_none());
}

#[test]
fn find_matches_display_name_case_insensitively() {
    let graph = diamondish();
    assert_eq!(graph.find("B").unwrap().identity, id("/r/b.csproj"));
    assert_eq!(graph.find("/R/C.csproj").unwrap().identity, id("/r/c.csproj"));
    assert!(graph.find("nope").is_none());
}

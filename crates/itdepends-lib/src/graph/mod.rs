//! Dependency graph model and read-only query surface
//!
//! Nodes are parsed [`ProjectRecord`]s (plus an optional solution
//! pseudo-node), edges mean "source depends on target". Cycles are legal
//! data - manifests may reference each other - so every traversal here
//! carries its own visited set. The graph is immutable once the builder
//! returns it.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::primitives::{Identity, ProjectRecord};

pub mod builder;
pub mod export;

pub use builder::{BuildOutcome, build};
pub use export::GraphExport;

/// The project reference graph of one workspace or project closure.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Directed graph: nodes = projects, edge a -> b = a depends on b
    graph: DiGraph<ProjectRecord, ()>,
    /// Map from identity to node index for fast lookup
    node_map: BTreeMap<Identity, NodeIndex>,
    /// Identity the traversal started from (project or solution pseudo-node)
    entry: Identity,
}

impl DependencyGraph {
    pub(crate) fn new(entry: Identity) -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: BTreeMap::new(),
            entry,
        }
    }

    /// Insert a record, keyed by its identity (idempotent).
    pub(crate) fn add_node(&mut self, record: ProjectRecord) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&record.identity) {
            return index;
        }
        let identity = record.identity.clone();
        let index = self.graph.add_node(record);
        self.node_map.insert(identity, index);
        index
    }

    /// Insert a source-depends-on-target edge.
    ///
    /// Self-edges are disallowed and duplicates collapse; both endpoints
    /// must already be nodes or the edge is ignored.
    pub(crate) fn add_edge(&mut self, source: &Identity, target: &Identity) {
        if source == target {
            return;
        }
        let (Some(&source_index), Some(&target_index)) =
            (self.node_map.get(source), self.node_map.get(target))
        else {
            return;
        };
        if self.graph.find_edge(source_index, target_index).is_none() {
            self.graph.add_edge(source_index, target_index, ());
        }
    }

    /// Identity of the node the traversal started from.
    pub fn entry(&self) -> &Identity {
        &self.entry
    }

    pub fn node(&self, identity: &Identity) -> Option<&ProjectRecord> {
        self.node_map
            .get(identity)
            .map(|&index| &self.graph[index])
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.node_map.contains_key(identity)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Buildable projects only, excluding the solution pseudo-node.
    pub fn project_count(&self) -> usize {
        self.nodes().filter(|record| record.is_project()).count()
    }

    /// All nodes in identity order.
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.node_map.values().map(|&index| &self.graph[index])
    }

    /// All edges as (source, target) identity pairs, unordered.
    pub fn edges(&self) -> impl Iterator<Item = (&Identity, &Identity)> {
        self.graph.edge_references().map(|edge| {
            (
                &self.graph[edge.source()].identity,
                &self.graph[edge.target()].identity,
            )
        })
    }

    /// Find a node by canonical identity string or display name
    /// (case-insensitive). Used by command handlers to resolve user input.
    pub fn find(&self, name: &str) -> Option<&ProjectRecord> {
        if let Some(record) = self
            .node_map
            .get(&Identity::canonicalize(std::path::Path::new(name)))
            .map(|&index| &self.graph[index])
        {
            return Some(record);
        }
        let lowered = name.to_lowercase();
        self.nodes()
            .find(|record| record.display_name.to_lowercase() == lowered)
    }

    /// Records this identity directly depends on; empty when the identity
    /// is absent (not an error).
    pub fn direct_dependencies(&self, identity: &Identity) -> Vec<&ProjectRecord> {
        let Some(&index) = self.node_map.get(identity) else {
            return Vec::new();
        };
        let mut dependencies: Vec<&ProjectRecord> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| &self.graph[edge.target()])
            .collect();
        dependencies.sort_by(|a, b| a.identity.cmp(&b.identity));
        dependencies
    }

    /// All identities reachable via outgoing edges, excluding the start.
    pub fn transitive_dependencies(&self, identity: &Identity) -> BTreeSet<Identity> {
        self.reachable(identity, Direction::Outgoing)
    }

    /// All identities with a directed path to this one, excluding the start.
    pub fn transitive_dependents(&self, identity: &Identity) -> BTreeSet<Identity> {
        self.reachable(identity, Direction::Incoming)
    }

    /// Cycle-safe reachability walk with an explicit queue and visited set.
    fn reachable(&self, identity: &Identity, direction: Direction) -> BTreeSet<Identity> {
        let Some(&start) = self.node_map.get(identity) else {
            return BTreeSet::new();
        };

        let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
        let mut queue: VecDeque<NodeIndex> = VecDeque::from([start]);
        let mut result = BTreeSet::new();

        while let Some(index) = queue.pop_front() {
            for neighbor in self.graph.neighbors_directed(index, direction) {
                if visited.insert(neighbor) {
                    result.insert(self.graph[neighbor].identity.clone());
                    queue.push_back(neighbor);
                }
            }
        }

        result
    }

    /// The node/edge-closed subgraph reachable forward from `root`,
    /// with `root` as its entry. `None` when `root` is not in the graph.
    pub fn induced_subgraph(&self, root: &Identity) -> Option<DependencyGraph> {
        let record = self.node(root)?;

        let mut kept: BTreeSet<Identity> = self.transitive_dependencies(root);
        kept.insert(record.identity.clone());

        let mut subgraph = DependencyGraph::new(record.identity.clone());
        for identity in &kept {
            if let Some(node) = self.node(identity) {
                subgraph.add_node(node.clone());
            }
        }
        for (source, target) in self.edges() {
            if kept.contains(source) && kept.contains(target) {
                subgraph.add_edge(source, target);
            }
        }
        Some(subgraph)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

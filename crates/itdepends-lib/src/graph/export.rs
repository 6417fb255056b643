//! Serializable view of a built graph
//!
//! The JSON artifact is the sole contract between this core and any
//! presentation layer. Nodes and edges are emitted in a stable order (entry
//! node first, then lexicographic by identity) so the artifact is
//! byte-identical across runs regardless of traversal order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::primitives::{OutputKind, PackageReference};

use super::DependencyGraph;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub entry: String,
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<EdgeExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeExport {
    pub id: String,
    pub label: String,
    pub path: String,
    pub output_kind: OutputKind,
    pub target_frameworks: Vec<String>,
    pub package_references: Vec<PackageReference>,
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeExport {
    pub source: String,
    pub target: String,
}

impl GraphExport {
    pub fn from_graph(graph: &DependencyGraph) -> Self {
        let entry = graph.entry().to_string();

        let mut nodes: Vec<NodeExport> = graph
            .nodes()
            .map(|record| NodeExport {
                id: record.identity.to_string(),
                label: record.display_name.clone(),
                path: record.path.to_string_lossy().into_owned(),
                output_kind: record.output_kind,
                target_frameworks: record.target_frameworks.clone(),
                package_references: record.package_references.clone(),
                properties: record.properties.clone(),
            })
            .collect();
        nodes.sort_by(|a, b| {
            (a.id != entry, &a.id).cmp(&(b.id != entry, &b.id))
        });

        let mut edges: Vec<EdgeExport> = graph
            .edges()
            .map(|(source, target)| EdgeExport {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

        Self {
            entry,
            nodes,
            edges,
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    include!("export.test.rs");
}

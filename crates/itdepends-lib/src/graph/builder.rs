//! Graph Builder - breadth-first, cycle-safe closure over manifest references
//!
//! The walk is iterative (explicit work queue, never naive recursion) so
//! mutually-referencing or deep manifest chains cannot grow the call stack.
//! Membership in the visited set alone decides skipping, which is what makes
//! circular references terminate. All state is local to one build call;
//! concurrent builds share nothing.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::manifest;
use crate::primitives::{Diagnostic, GraphError, Identity, ProjectRecord};
use crate::solution::{self, SolutionEntries};

use super::DependencyGraph;

/// A built graph plus the non-fatal findings collected along the way.
#[derive(Debug)]
pub struct BuildOutcome {
    pub graph: DependencyGraph,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the dependency graph for a `.sln` or `.csproj` input path.
///
/// Fatal errors (missing entry file, unsupported extension) abort; everything
/// else degrades to diagnostics on the outcome. A solution with no members
/// yields a graph containing only the pseudo-node, distinct from failure.
pub fn build(input: &Path) -> Result<BuildOutcome, GraphError> {
    let entries = solution::resolve_entries(input)?;
    Ok(build_from_entries(input, entries, manifest::read_project_or_stub))
}

/// Closure-driven core of [`build`].
///
/// The manifest reader is injected so tests can count or script reads; the
/// visited set and all collections are fresh per call.
pub(crate) fn build_from_entries<F>(
    input: &Path,
    entries: SolutionEntries,
    mut read: F,
) -> BuildOutcome
where
    F: FnMut(&Path, &mut Vec<Diagnostic>) -> ProjectRecord,
{
    let mut diagnostics = entries.diagnostics;

    let entry = match &entries.workspace {
        Some(workspace) => workspace.identity.clone(),
        None => Identity::canonicalize(
            entries
                .projects
                .first()
                .map_or(input, PathBuf::as_path),
        ),
    };
    let workspace_identity = entries
        .workspace
        .as_ref()
        .map(|workspace| workspace.identity.clone());
    let member_identities: Vec<Identity> = entries
        .projects
        .iter()
        .map(|path| Identity::canonicalize(path))
        .collect();

    let mut graph = DependencyGraph::new(entry);
    if let Some(workspace) = entries.workspace {
        graph.add_node(workspace);
    }

    let mut visited: HashSet<Identity> = HashSet::new();
    let mut queue: VecDeque<PathBuf> = entries.projects.into_iter().collect();
    // Edges are recorded during the walk and inserted once every reachable
    // node exists, keeping the nodes-contain-all-endpoints invariant.
    let mut pending_edges: Vec<(Identity, Identity)> = Vec::new();

    while let Some(path) = queue.pop_front() {
        let identity = Identity::canonicalize(&path);
        // Visited-set membership, not graph connectivity, decides the skip.
        if !visited.insert(identity.clone()) {
            continue;
        }

        let record = read(&path, &mut diagnostics);
        let references = record.project_references.clone();
        graph.add_node(record);

        for reference in references {
            if reference.path.exists() {
                pending_edges.push((identity.clone(), reference.identity.clone()));
                if !visited.contains(&reference.identity) {
                    queue.push_back(reference.path);
                }
            } else {
                debug!(
                    referrer = %identity,
                    target = %reference.path.display(),
                    "dropping dangling project reference"
                );
                diagnostics.push(Diagnostic::DanglingReference {
                    referrer: identity.clone(),
                    target: reference.path,
                });
            }
        }
    }

    for (source, target) in pending_edges {
        graph.add_edge(&source, &target);
    }
    if let Some(workspace) = workspace_identity {
        for member in member_identities {
            graph.add_edge(&workspace, &member);
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        diagnostics = diagnostics.len(),
        "dependency graph built"
    );

    BuildOutcome { graph, diagnostics }
}

#[cfg(test)]
mod tests {
    include!("builder.test.rs");
}

//! Command execution handlers
//!
//! Each handler builds the graph for its input, runs queries against it, and
//! prints results to stdout. Diagnostics ride on the build outcome and are
//! surfaced as warnings; only fatal errors abort the run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::graph::{self, BuildOutcome, DependencyGraph, GraphExport};
use crate::primitives::{Diagnostic, GraphError, OutputKind, ProjectRecord};

use super::{CliConfig, Commands};

/// Execute the selected CLI command.
pub fn execute_command(config: CliConfig) -> Result<()> {
    let command = match config.command {
        Some(command) => command,
        None => {
            println!("itdepends - .NET project dependency graphs");
            println!("Run 'itdepends --help' for usage information");
            return Ok(());
        }
    };

    match command {
        Commands::Analyze { input, output } => handle_analyze(&input, output.as_deref()),
        Commands::Deps {
            input,
            project,
            transitive,
        } => handle_deps(&input, &project, transitive),
        Commands::Dependents { input, project } => handle_dependents(&input, &project),
        Commands::Focus {
            input,
            project,
            output,
        } => handle_focus(&input, &project, output.as_deref()),
        Commands::Version => handle_version(),
    }
}

fn handle_analyze(input: &Path, output: Option<&Path>) -> Result<()> {
    let outcome = build_graph(input)?;
    report_diagnostics(&outcome.diagnostics);

    let graph = &outcome.graph;
    if graph.project_count() == 0 {
        println!("no projects found in {}", input.display());
    } else {
        println!(
            "built dependency graph: {} projects, {} edges",
            graph.project_count(),
            graph.edge_count()
        );
    }

    if let Some(output) = output {
        write_export(graph, output)?;
    }
    Ok(())
}

fn handle_deps(input: &Path, project: &str, transitive: bool) -> Result<()> {
    let outcome = build_graph(input)?;
    report_diagnostics(&outcome.diagnostics);
    let graph = &outcome.graph;
    let record = find_project(graph, project)?;

    if transitive {
        let closure = graph.transitive_dependencies(&record.identity);
        println!(
            "{} transitively depends on {} project(s)",
            record.display_name,
            closure.len()
        );
        for identity in &closure {
            if let Some(dependency) = graph.node(identity) {
                print_project_line(dependency);
            }
        }
    } else {
        let dependencies = graph.direct_dependencies(&record.identity);
        println!(
            "{} directly depends on {} project(s)",
            record.display_name,
            dependencies.len()
        );
        for dependency in dependencies {
            print_project_line(dependency);
        }
    }
    Ok(())
}

fn handle_dependents(input: &Path, project: &str) -> Result<()> {
    let outcome = build_graph(input)?;
    report_diagnostics(&outcome.diagnostics);
    let graph = &outcome.graph;
    let record = find_project(graph, project)?;

    // The solution pseudo-node "depends" on every member; skip it.
    let dependents: Vec<&ProjectRecord> = graph
        .transitive_dependents(&record.identity)
        .iter()
        .filter_map(|identity| graph.node(identity))
        .filter(|dependent| dependent.is_project())
        .collect();
    println!(
        "{} project(s) depend on {}",
        dependents.len(),
        record.display_name
    );
    for dependent in dependents {
        print_project_line(dependent);
    }
    Ok(())
}

fn handle_focus(input: &Path, project: &str, output: Option<&Path>) -> Result<()> {
    let outcome = build_graph(input)?;
    report_diagnostics(&outcome.diagnostics);
    let graph = &outcome.graph;
    let record = find_project(graph, project)?;

    let subgraph = graph
        .induced_subgraph(&record.identity)
        .ok_or_else(|| GraphError::ProjectNotInGraph {
            name: project.to_string(),
        })?;
    println!(
        "subgraph of {}: {} projects, {} edges",
        record.display_name,
        subgraph.project_count(),
        subgraph.edge_count()
    );

    if let Some(output) = output {
        write_export(&subgraph, output)?;
    }
    Ok(())
}

fn handle_version() -> Result<()> {
    println!("itdepends {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn build_graph(input: &Path) -> Result<BuildOutcome> {
    graph::build(input).with_context(|| format!("failed to analyze {}", input.display()))
}

fn find_project<'graph>(
    graph: &'graph DependencyGraph,
    name: &str,
) -> Result<&'graph ProjectRecord> {
    match graph.find(name) {
        Some(record) => Ok(record),
        None => bail!(GraphError::ProjectNotInGraph {
            name: name.to_string(),
        }),
    }
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        warn!("{diagnostic}");
    }
}

fn print_project_line(record: &ProjectRecord) {
    let kind = match record.output_kind {
        OutputKind::Executable => "executable",
        // Unknown displays as a library; the record keeps the distinction.
        OutputKind::Library | OutputKind::Unknown => "library",
        OutputKind::Workspace => "workspace",
    };
    println!("  {} [{}] {}", record.display_name, kind, record.identity);
}

fn write_export(graph: &DependencyGraph, output: &Path) -> Result<()> {
    let export = GraphExport::from_graph(graph);
    let json = export
        .to_pretty_json()
        .context("failed to serialize graph")?;
    std::fs::write(output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("graph written to {}", absolute_display(output).display());
    Ok(())
}

fn absolute_display(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}

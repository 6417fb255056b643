// Tests for the graph builder

use super::*;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn csproj(references: &[&str]) -> String {
    let items: String = references
        .iter()
        .map(|reference| format!("    <ProjectReference Include=\"{reference}\" />\n"))
        .collect();
    format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n  <ItemGroup>\n{items}  </ItemGroup>\n</Project>\n"
    )
}

fn solution(members: &[(&str, &str)]) -> String {
    let mut content = String::from("Microsoft Visual Studio Solution File, Format Version 12.00\n");
    for (name, relative_path) in members {
        content.push_str(&format!(
            "Project(\"{{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}}\") = \"{name}\", \"{relative_path}\", \"{{11111111-2222-3333-4444-555555555555}}\"\nEndProject\n"
        ));
    }
    content
}

fn id(path: &Path) -> Identity {
    Identity::canonicalize(path)
}

#[test]
fn cycle_terminates_with_both_nodes_and_edges() {
    let temp = TempDir::new().unwrap();
    let a = write_file(temp.path(), "A/A.csproj", &csproj(&["..\\B\\B.csproj"]));
    let b = write_file(temp.path(), "B/B.csproj", &csproj(&["..\\A\\A.csproj"]));

    let outcome = build(&a).unwrap();
    let graph = &outcome.graph;

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        graph.transitive_dependencies(&id(&a)),
        std::collections::BTreeSet::from([id(&b)])
    );
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn dangling_reference_drops_edge_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    let a = write_file(temp.path(), "A/A.csproj", &csproj(&["..\\X\\X.csproj"]));

    let outcome = build(&a).unwrap();

    assert_eq!(outcome.graph.node_count(), 1);
    assert_eq!(outcome.graph.edge_count(), 0);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(
        &outcome.diagnostics[0],
        Diagnostic::DanglingReference { target, .. } if target.ends_with("X/X.csproj")
    ));
}

#[test]
fn each_manifest_read_once_per_identity() {
    let temp = TempDir::new().unwrap();
    // Diamond: A -> B, A -> C, B -> D, C -> D. D is referenced twice.
    let a = write_file(
        temp.path(),
        "A/A.csproj",
        &csproj(&["..\\B\\B.csproj", "..\\C\\C.csproj"]),
    );
    write_file(temp.path(), "B/B.csproj", &csproj(&["..\\D\\D.csproj"]));
    write_file(temp.path(), "C/C.csproj", &csproj(&["..\\D\\D.csproj"]));
    write_file(temp.path(), "D/D.csproj", &csproj(&[]));

    let mut reads: Vec<Identity> = Vec::new();
    let entries = crate::solution::resolve_entries(&a).unwrap();
    let outcome = build_from_entries(&a, entries, |path, diagnostics| {
        reads.push(Identity::canonicalize(path));
        manifest::read_project_or_stub(path, diagnostics)
    });

    assert_eq!(outcome.graph.node_count(), 4);
    assert_eq!(outcome.graph.edge_count(), 4);
    assert_eq!(reads.len(), 4);
    let unique: HashSet<&Identity> = reads.iter().collect();
    assert_eq!(unique.len(), reads.len());
}

#[test]
fn building_twice_yields_identical_graphs() {
    let temp = TempDir::new().unwrap();
    let a = write_file(
        temp.path(),
        "A/A.csproj",
        &csproj(&["..\\B\\B.csproj", "..\\C\\C.csproj"]),
    );
    write_file(temp.path(), "B/B.csproj", &csproj(&["..\\C\\C.csproj"]));
    write_file(temp.path(), "C/C.csproj", &csproj(&[]));

    let first = build(&a).unwrap();
    let second = build(&a).unwrap();

    let export_first = crate::graph::GraphExport::from_graph(&first.graph);
    let export_second = crate::graph::GraphExport::from_graph(&second.graph);
    assert_eq!(
        export_first.to_pretty_json().unwrap(),
        export_second.to_pretty_json().unwrap()
    );
}

#[test]
fn different_reference_spellings_collapse_to_one_node() {
    let temp = TempDir::new().unwrap();
    let a = write_file(
        temp.path(),
        "A/A.csproj",
        // Two spellings of the same manifest.
        &csproj(&["..\\Lib\\Lib.csproj", "..\\A\\..\\Lib\\Lib.csproj"]),
    );
    write_file(temp.path(), "Lib/Lib.csproj", &csproj(&[]));

    let outcome = build(&a).unwrap();
    assert_eq!(outcome.graph.node_count(), 2);
    assert_eq!(outcome.graph.edge_count(), 1);
}

#[test]
fn solution_build_adds_pseudo_node_and_member_edges() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "App/App.csproj", &csproj(&["..\\Lib\\Lib.csproj"]));
    write_file(temp.path(), "Lib/Lib.csproj", &csproj(&[]));
    let sln = write_file(
        temp.path(),
        "All.sln",
        &solution(&[("App", "App\\App.csproj"), ("Lib", "Lib\\Lib.csproj")]),
    );

    let outcome = build(&sln).unwrap();
    let graph = &outcome.graph;

    assert_eq!(graph.entry(), &id(&sln));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.project_count(), 2);
    // workspace -> App, workspace -> Lib, App -> Lib
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(
        graph.transitive_dependencies(&id(&sln)).len(),
        2
    );
}

#[test]
fn empty_solution_builds_pseudo_node_only() {
    let temp = TempDir::new().unwrap();
    let sln = write_file(temp.path(), "Empty.sln", &solution(&[]));

    let outcome = build(&sln).unwrap();
    assert_eq!(outcome.graph.node_count(), 1);
    assert_eq!(outcome.graph.project_count(), 0);
    assert_eq!(outcome.graph.edge_count(), 0);
}

#[test]
fn entry_parse_failure_degrades_to_stub() {
    let temp = TempDir::new().unwrap();
    let broken = write_file(
        temp.path(),
        "Broken.csproj",
        "<Project><PropertyGroup></Project>",
    );

    let outcome = build(&broken).unwrap();
    assert_eq!(outcome.graph.node_count(), 1);
    assert_eq!(outcome.graph.entry(), &id(&broken));
    assert!(matches!(
        &outcome.diagnostics[0],
        Diagnostic::ParseFailure { .. }
    ));
}

#[test]
fn missing_entry_is_fatal() {
    let temp = TempDir::new().unwrap();
    let result = build(&temp.path().join("Missing.csproj"));
    assert!(matches!(result, Err(GraphError::NotFound { .. })));
}

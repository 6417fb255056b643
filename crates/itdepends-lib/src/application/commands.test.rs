// Tests for command handlers

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

fn simple_project(references: &[&str]) -> String {
    let items: String = references
        .iter()
        .map(|reference| format!("<ProjectReference Include=\"{reference}\" />"))
        .collect();
    format!("<Project><ItemGroup>{items}</ItemGroup></Project>")
}

#[test]
fn analyze_writes_json_artifact() {
    let temp = TempDir::new().unwrap();
    let app = write_file(
        temp.path(),
        "App/App.csproj",
        &simple_project(&["..\\Lib\\Lib.csproj"]),
    );
    write_file(temp.path(), "Lib/Lib.csproj", &simple_project(&[]));
    let output = temp.path().join("graph.json");

    handle_analyze(&app, Some(&output)).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    let export: GraphExport = serde_json::from_str(&json).unwrap();
    assert_eq!(export.nodes.len(), 2);
    assert_eq!(export.edges.len(), 1);
}

#[test]
fn find_project_reports_unknown_name() {
    let temp = TempDir::new().unwrap();
    let app = write_file(temp.path(), "App.csproj", &simple_project(&[]));

    let outcome = build_graph(&app).unwrap();
    let error = find_project(&outcome.graph, "NoSuchProject").unwrap_err();
    assert!(error.to_string().contains("NoSuchProject"));
}

#[test]
fn deps_command_succeeds_by_display_name() {
    let temp = TempDir::new().unwrap();
    let app = write_file(
        temp.path(),
        "App/App.csproj",
        &simple_project(&["..\\Lib\\Lib.csproj"]),
    );
    write_file(temp.path(), "Lib/Lib.csproj", &simple_project(&[]));

    handle_deps(&app, "app", false).unwrap();
    handle_deps(&app, "app", true).unwrap();
    handle_dependents(&app, "lib").unwrap();
}

#[test]
fn focus_writes_scoped_artifact() {
    let temp = TempDir::new().unwrap();
    let app = write_file(
        temp.path(),
        "App/App.csproj",
        &simple_project(&["..\\Lib\\Lib.csproj"]),
    );
    write_file(temp.path(), "Lib/Lib.csproj", &simple_project(&[]));
    let output = temp.path().join("focus.json");

    handle_focus(&app, "lib", Some(&output)).unwrap();

    let export: GraphExport =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(export.nodes.len(), 1);
    assert!(export.edges.is_empty());
    assert!(export.entry.ends_with("lib/lib.csproj"));
}

#[test]
fn missing_input_surfaces_offending_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("Missing.sln");
    let error = handle_analyze(&missing, None).unwrap_err();
    assert!(format!("{error:#}").contains("Missing.sln"));
}

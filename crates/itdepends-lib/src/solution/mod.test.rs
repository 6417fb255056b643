// Tests for the solution entry resolver

use super::*;
use crate::primitives::OutputKind;
use std::fs;
use tempfile::TempDir;

const TYPE_GUID: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";
const FOLDER_GUID: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn project_line(name: &str, relative_path: &str) -> String {
    format!(
        "Project(\"{TYPE_GUID}\") = \"{name}\", \"{relative_path}\", \"{{11111111-2222-3333-4444-555555555555}}\"\nEndProject"
    )
}

#[test]
fn members_resolved_and_folders_excluded() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "App/App.csproj", "<Project/>");
    write_file(temp.path(), "Lib/Lib.csproj", "<Project/>");
    let sln = write_file(
        temp.path(),
        "All.sln",
        &format!(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n{}\n{}\nProject(\"{FOLDER_GUID}\") = \"Solution Items\", \"Solution Items\", \"{{99999999-0000-0000-0000-000000000000}}\"\nEndProject\n",
            project_line("App", "App\\App.csproj"),
            project_line("Lib", "Lib\\Lib.csproj"),
        ),
    );

    let entries = resolve_entries(&sln).unwrap();

    assert_eq!(entries.projects.len(), 2);
    assert_eq!(entries.projects[0], temp.path().join("App/App.csproj"));
    assert_eq!(entries.projects[1], temp.path().join("Lib/Lib.csproj"));
    assert!(entries.diagnostics.is_empty());

    let workspace = entries.workspace.unwrap();
    assert_eq!(workspace.display_name, "All");
    assert_eq!(workspace.output_kind, OutputKind::Workspace);
}

#[test]
fn missing_member_skipped_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "App/App.csproj", "<Project/>");
    let sln = write_file(
        temp.path(),
        "All.sln",
        &format!(
            "{}\n{}\n",
            project_line("App", "App\\App.csproj"),
            project_line("Gone", "Gone\\Gone.csproj"),
        ),
    );

    let entries = resolve_entries(&sln).unwrap();

    assert_eq!(entries.projects.len(), 1);
    assert_eq!(entries.diagnostics.len(), 1);
    assert!(matches!(
        &entries.diagnostics[0],
        Diagnostic::MissingProject { path } if path.ends_with("Gone/Gone.csproj")
    ));
}

#[test]
fn zero_members_is_empty_not_error() {
    let temp = TempDir::new().unwrap();
    let sln = write_file(
        temp.path(),
        "Empty.sln",
        "Microsoft Visual Studio Solution File, Format Version 12.00\n",
    );

    let entries = resolve_entries(&sln).unwrap();
    assert!(entries.projects.is_empty());
    assert!(entries.diagnostics.is_empty());
    assert!(entries.workspace.is_some());
}

#[test]
fn single_project_entry_has_no_pseudo_node() {
    let temp = TempDir::new().unwrap();
    let csproj = write_file(temp.path(), "App.csproj", "<Project/>");

    let entries = resolve_entries(&csproj).unwrap();
    assert!(entries.workspace.is_none());
    assert_eq!(entries.projects, vec![csproj]);
}

#[test]
fn missing_input_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = resolve_entries(&temp.path().join("Missing.sln"));
    assert!(matches!(result, Err(GraphError::NotFound { .. })));
}

#[test]
fn unrecognized_extension_is_unsupported() {
    let temp = TempDir::new().unwrap();
    let other = write_file(temp.path(), "readme.txt", "hello");
    let result = resolve_entries(&other);
    assert!(matches!(result, Err(GraphError::UnsupportedInput { .. })));
}

#[test]
fn case_insensitive_csproj_suffix() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "App/App.CSPROJ", "<Project/>");
    let sln = write_file(
        temp.path(),
        "All.sln",
        &format!("{}\n", project_line("App", "App\\App.CSPROJ")),
    );

    let entries = resolve_entries(&sln).unwrap();
    assert_eq!(entries.projects.len(), 1);
}

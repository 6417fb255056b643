//! E2E tests for the analyze command

use anyhow::Result;
use assert_cmd::Command;
use itdepends_tests::SolutionFixture;
use predicates::prelude::*;

fn itdepends() -> Command {
    Command::cargo_bin("itdepends").expect("binary built")
}

#[test]
fn analyze_solution_prints_summary() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Lib", &[])?;
    fixture.add_project("App", &["Lib"])?;
    let sln = fixture.add_solution("All", &["App", "Lib"])?;

    itdepends()
        .arg("analyze")
        .arg(&sln)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 projects"));
    Ok(())
}

#[test]
fn analyze_writes_json_artifact() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Lib", &[])?;
    fixture.add_project("App", &["Lib"])?;
    let sln = fixture.add_solution("All", &["App", "Lib"])?;
    let output = fixture.root().join("graph.json");

    itdepends()
        .arg("analyze")
        .arg(&sln)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("graph written to"));

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    let nodes = json["nodes"].as_array().expect("nodes array");
    let edges = json["edges"].as_array().expect("edges array");

    // Solution pseudo-node + 2 projects; workspace->App, workspace->Lib, App->Lib.
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), 3);
    assert_eq!(nodes[0]["id"], json["entry"]);
    assert_eq!(nodes[0]["output_kind"], "Workspace");
    Ok(())
}

#[test]
fn analyze_single_project_recurses_into_references() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Core", &[])?;
    fixture.add_project("Data", &["Core"])?;
    let app = fixture.add_project("App", &["Data"])?;

    itdepends()
        .arg("analyze")
        .arg(&app)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 projects"));
    Ok(())
}

#[test]
fn solution_folder_entries_are_excluded() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Only", &[])?;
    let sln = fixture.add_solution("All", &["Only"])?;

    itdepends()
        .arg("analyze")
        .arg(&sln)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 projects"));
    Ok(())
}

#[test]
fn empty_solution_reports_no_projects_found() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    let sln = fixture.add_solution("Empty", &[])?;

    itdepends()
        .arg("analyze")
        .arg(&sln)
        .assert()
        .success()
        .stdout(predicate::str::contains("no projects found"));
    Ok(())
}

#[test]
fn cyclic_references_terminate() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("A", &["B"])?;
    let b = fixture.add_project("B", &["A"])?;

    itdepends()
        .arg("analyze")
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 projects"));
    Ok(())
}

//! E2E tests for the deps, dependents, and focus commands

use anyhow::Result;
use assert_cmd::Command;
use itdepends_tests::SolutionFixture;
use predicates::prelude::*;

fn itdepends() -> Command {
    Command::cargo_bin("itdepends").expect("binary built")
}

/// App -> Data -> Core, Tool -> Core
fn layered_fixture() -> Result<(SolutionFixture, std::path::PathBuf)> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Core", &[])?;
    fixture.add_project("Data", &["Core"])?;
    fixture.add_project("App", &["Data"])?;
    fixture.add_project("Tool", &["Core"])?;
    let sln = fixture.add_solution("All", &["App", "Data", "Core", "Tool"])?;
    Ok((fixture, sln))
}

#[test]
fn deps_lists_direct_dependencies_only() -> Result<()> {
    let (_fixture, sln) = layered_fixture()?;

    itdepends()
        .args(["deps"])
        .arg(&sln)
        .arg("App")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("App directly depends on 1 project(s)")
                .and(predicate::str::contains("Data"))
                .and(predicate::str::contains("Core").not()),
        );
    Ok(())
}

#[test]
fn deps_transitive_includes_full_closure() -> Result<()> {
    let (_fixture, sln) = layered_fixture()?;

    itdepends()
        .args(["deps"])
        .arg(&sln)
        .arg("App")
        .arg("--transitive")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("App transitively depends on 2 project(s)")
                .and(predicate::str::contains("Data"))
                .and(predicate::str::contains("Core")),
        );
    Ok(())
}

#[test]
fn dependents_walks_reverse_edges() -> Result<()> {
    let (_fixture, sln) = layered_fixture()?;

    itdepends()
        .args(["dependents"])
        .arg(&sln)
        .arg("Core")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Data [")
                .and(predicate::str::contains("App ["))
                .and(predicate::str::contains("Tool [")),
        );
    Ok(())
}

#[test]
fn focus_exports_reachable_subgraph() -> Result<()> {
    let (fixture, sln) = layered_fixture()?;
    let output = fixture.root().join("focus.json");

    itdepends()
        .args(["focus"])
        .arg(&sln)
        .arg("Data")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("subgraph of Data: 2 projects, 1 edges"));

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    let labels: Vec<&str> = json["nodes"]
        .as_array()
        .expect("nodes array")
        .iter()
        .map(|node| node["label"].as_str().expect("label"))
        .collect();
    assert_eq!(labels, vec!["Data", "Core"]);
    Ok(())
}

#[test]
fn unknown_project_name_fails() -> Result<()> {
    let (_fixture, sln) = layered_fixture()?;

    itdepends()
        .args(["deps"])
        .arg(&sln)
        .arg("Nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nope"));
    Ok(())
}

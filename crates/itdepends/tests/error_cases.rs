//! E2E tests for fatal and degraded error handling

use anyhow::Result;
use assert_cmd::Command;
use itdepends_tests::SolutionFixture;
use predicates::prelude::*;

fn itdepends() -> Command {
    Command::cargo_bin("itdepends").expect("binary built")
}

#[test]
fn missing_input_fails_with_path_in_message() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    let missing = fixture.root().join("Missing.sln");

    itdepends()
        .arg("analyze")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Missing.sln").and(predicate::str::contains("not found")),
        );
    Ok(())
}

#[test]
fn unsupported_extension_fails() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    let readme = fixture.write("README.md", "not a project")?;

    itdepends()
        .arg("analyze")
        .arg(&readme)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported input"));
    Ok(())
}

#[test]
fn broken_member_manifest_degrades_to_stub() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Good", &[])?;
    fixture.write("Bad/Bad.csproj", "<Project><PropertyGroup></Project>")?;
    let sln = fixture.add_solution("All", &["Good", "Bad"])?;

    // The broken manifest still yields a node; the run succeeds.
    itdepends()
        .arg("analyze")
        .arg(&sln)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 projects"));
    Ok(())
}

#[test]
fn dangling_reference_is_nonfatal_and_logged() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    let app = fixture.add_project("App", &["Ghost"])?;

    itdepends()
        .arg("analyze")
        .arg(&app)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 projects"))
        .stderr(predicate::str::contains("Ghost.csproj"));
    Ok(())
}

#[test]
fn version_command_prints_version() -> Result<()> {
    itdepends()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

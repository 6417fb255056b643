//! Library-level pipeline tests: fixture tree in, graph and export out

use anyhow::Result;
use itdepends_lib::graph::{self, GraphExport};
use itdepends_lib::{Diagnostic, OutputKind};
use itdepends_tests::SolutionFixture;

#[test]
fn solution_build_yields_pseudo_node_and_member_edges() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("Lib", &[])?;
    fixture.add_project("App", &["Lib"])?;
    let sln = fixture.add_solution("All", &["App", "Lib"])?;

    let outcome = graph::build(&sln)?;
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.graph.node_count(), 3);
    assert_eq!(outcome.graph.edge_count(), 3);

    let export = GraphExport::from_graph(&outcome.graph);
    assert_eq!(export.nodes[0].id, export.entry);
    assert_eq!(export.nodes[0].output_kind, OutputKind::Workspace);
    assert_eq!(export.nodes[0].label, "All");
    Ok(())
}

#[test]
fn dangling_reference_surfaces_as_diagnostic_not_edge() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    let app = fixture.add_project("App", &["Ghost"])?;

    let outcome = graph::build(&app)?;
    assert_eq!(outcome.graph.node_count(), 1);
    assert_eq!(outcome.graph.edge_count(), 0);
    assert!(matches!(
        &outcome.diagnostics[..],
        [Diagnostic::DanglingReference { target, .. }] if target.ends_with("Ghost.csproj")
    ));
    Ok(())
}

#[test]
fn cycles_build_without_duplicate_reads() -> Result<()> {
    let fixture = SolutionFixture::new()?;
    fixture.add_project("A", &["B"])?;
    let b = fixture.add_project("B", &["A"])?;

    let outcome = graph::build(&b)?;
    assert_eq!(outcome.graph.node_count(), 2);
    assert_eq!(outcome.graph.edge_count(), 2);
    assert!(outcome.diagnostics.is_empty());
    Ok(())
}

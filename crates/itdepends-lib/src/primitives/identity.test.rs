// Tests for identity canonicalization

use super::*;

#[test]
fn casing_and_separator_differences_collapse() {
    let a = Identity::canonicalize(Path::new("/Repo/Src/App/App.csproj"));
    let b = Identity::canonicalize(Path::new("/repo/src/app/APP.CSPROJ"));
    assert_eq!(a, b);
}

#[test]
fn relative_spellings_collapse_after_resolution() {
    let base = Path::new("/repo/src/app");
    let direct = resolve_reference(base, "../lib/Lib.csproj");
    let indirect = resolve_reference(base, "..\\..\\src\\lib\\Lib.csproj");
    assert_eq!(
        Identity::canonicalize(&direct),
        Identity::canonicalize(&indirect)
    );
}

#[test]
fn dot_segments_are_folded() {
    let id = Identity::canonicalize(Path::new("/repo/./src/../src/lib/Lib.csproj"));
    assert_eq!(id.as_str(), "/repo/src/lib/lib.csproj");
}

#[test]
fn backslash_references_resolve_against_base_dir() {
    let resolved = resolve_reference(Path::new("/repo/app"), "..\\lib\\Lib.csproj");
    assert_eq!(resolved, Path::new("/repo/lib/Lib.csproj"));
}

#[test]
fn file_stem_strips_directory_and_extension() {
    let id = Identity::canonicalize(Path::new("/repo/src/Core.Utils/Core.Utils.csproj"));
    assert_eq!(id.file_stem(), "core.utils");
}

#[test]
fn relative_input_absolutizes_against_current_dir() {
    let id = Identity::canonicalize(Path::new("app/App.csproj"));
    assert!(id.as_str().ends_with("app/app.csproj"));
    assert!(id.as_str().starts_with('/') || id.as_str().contains(":/"));
}

#[test]
fn parent_segments_above_root_are_dropped() {
    let id = Identity::canonicalize(Path::new("/../repo/App.csproj"));
    assert_eq!(id.as_str(), "/repo/app.csproj");
}

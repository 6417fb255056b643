// Tests for the manifest reader

use super::*;
use crate::primitives::{Identity, UNKNOWN_VERSION};
use std::fs;
use tempfile::TempDir;

fn write_manifest(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn full_extraction() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "App/App.csproj",
        r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
    <OutputType>Exe</OutputType>
    <AssemblyName>App.Host</AssemblyName>
    <RootNamespace>App</RootNamespace>
    <Version>1.2.3</Version>
  </PropertyGroup>
  <ItemGroup>
    <ProjectReference Include="..\Lib\Lib.csproj" />
    <PackageReference Include="Serilog" Version="3.1.1" />
  </ItemGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();

    assert_eq!(record.display_name, "App");
    assert_eq!(record.output_kind, OutputKind::Executable);
    assert_eq!(record.target_frameworks, vec!["net8.0"]);
    assert_eq!(record.project_references.len(), 1);
    assert_eq!(
        record.project_references[0].identity,
        Identity::canonicalize(&temp.path().join("Lib/Lib.csproj"))
    );
    assert_eq!(
        record.package_references,
        vec![PackageReference::new("Serilog", Some("3.1.1".to_string()))]
    );
    assert_eq!(record.properties.get("Sdk").unwrap(), "Microsoft.NET.Sdk");
    assert_eq!(record.properties.get("AssemblyName").unwrap(), "App.Host");
    assert_eq!(record.properties.get("RootNamespace").unwrap(), "App");
    assert_eq!(record.properties.get("Version").unwrap(), "1.2.3");
}

#[test]
fn singular_framework_wins_over_plural() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "A.csproj",
        r#"<Project>
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
    <TargetFrameworks>net6.0;net7.0</TargetFrameworks>
  </PropertyGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();
    assert_eq!(record.target_frameworks, vec!["net8.0"]);
}

#[test]
fn plural_frameworks_split_on_semicolons() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "A.csproj",
        r#"<Project>
  <PropertyGroup>
    <TargetFrameworks>net6.0;net8.0;;netstandard2.0</TargetFrameworks>
  </PropertyGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();
    assert_eq!(
        record.target_frameworks,
        vec!["net6.0", "net8.0", "netstandard2.0"]
    );
}

#[test]
fn output_kind_mapping() {
    let temp = TempDir::new().unwrap();
    for (value, expected) in [
        ("Exe", OutputKind::Executable),
        ("WinExe", OutputKind::Executable),
        ("Library", OutputKind::Library),
        ("Module", OutputKind::Library),
    ] {
        let path = write_manifest(
            temp.path(),
            "A.csproj",
            &format!(
                "<Project><PropertyGroup><OutputType>{value}</OutputType></PropertyGroup></Project>"
            ),
        );
        assert_eq!(read_project(&path).unwrap().output_kind, expected);
    }

    let path = write_manifest(temp.path(), "B.csproj", "<Project></Project>");
    assert_eq!(read_project(&path).unwrap().output_kind, OutputKind::Unknown);
}

#[test]
fn package_without_version_gets_sentinel() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "A.csproj",
        r#"<Project>
  <ItemGroup>
    <PackageReference Include="Foo" />
  </ItemGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();
    assert_eq!(record.package_references.len(), 1);
    assert_eq!(record.package_references[0].name, "Foo");
    assert_eq!(record.package_references[0].version, UNKNOWN_VERSION);
}

#[test]
fn package_version_as_child_element() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "A.csproj",
        r#"<Project>
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json">
      <Version>13.0.3</Version>
    </PackageReference>
  </ItemGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();
    assert_eq!(
        record.package_references,
        vec![PackageReference::new(
            "Newtonsoft.Json",
            Some("13.0.3".to_string())
        )]
    );
}

#[test]
fn entity_references_join_surrounding_text() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "A.csproj",
        r#"<Project>
  <PropertyGroup>
    <Company>Fruit &amp; Nut Ltd</Company>
    <Description>1 &lt; 2 &#8212; always</Description>
  </PropertyGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();
    assert_eq!(record.properties.get("Company").unwrap(), "Fruit & Nut Ltd");
    assert_eq!(
        record.properties.get("Description").unwrap(),
        "1 < 2 \u{2014} always"
    );
}

#[test]
fn display_name_keeps_path_casing() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "MyApp.Core/MyApp.Core.csproj",
        "<Project></Project>",
    );

    let record = read_project(&path).unwrap();
    assert_eq!(record.display_name, "MyApp.Core");
    assert_eq!(record.identity, Identity::canonicalize(&path));
    assert!(record.identity.as_str().ends_with("myapp.core/myapp.core.csproj"));
}

#[test]
fn missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = read_project(&temp.path().join("Missing.csproj"));
    assert!(matches!(result, Err(GraphError::NotFound { .. })));
}

#[test]
fn malformed_xml_degrades_to_stub_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "Broken.csproj",
        "<Project><PropertyGroup><TargetFramework>net8.0</Project>",
    );

    let mut diagnostics = Vec::new();
    let record = read_project_or_stub(&path, &mut diagnostics);

    assert_eq!(record.display_name, "Broken");
    assert_eq!(record.identity, Identity::canonicalize(&path));
    assert!(record.project_references.is_empty());
    assert!(record.package_references.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        &diagnostics[0],
        Diagnostic::ParseFailure { path: failed, .. } if failed == &path
    ));
}

#[test]
fn references_in_multiple_item_groups_all_captured() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "A.csproj",
        r#"<Project>
  <ItemGroup>
    <ProjectReference Include="B\B.csproj" />
  </ItemGroup>
  <ItemGroup>
    <ProjectReference Include="C\C.csproj" />
    <PackageReference Include="Foo" Version="1.0.0" />
  </ItemGroup>
</Project>"#,
    );

    let record = read_project(&path).unwrap();
    assert_eq!(record.project_references.len(), 2);
    assert_eq!(record.package_references.len(), 1);
}

//! On-disk solution fixtures for end-to-end tests
//!
//! Synthesizes realistic `.sln`/`.csproj` trees inside a temp directory so
//! tests can drive the compiled binary against them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

const PROJECT_TYPE_GUID: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";
const FOLDER_TYPE_GUID: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

/// A temp directory holding a synthesized multi-project workspace.
pub struct SolutionFixture {
    temp: TempDir,
}

impl SolutionFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write a project manifest at `<name>/<name>.csproj` referencing the
    /// given sibling projects.
    pub fn add_project(&self, name: &str, references: &[&str]) -> Result<PathBuf> {
        self.add_project_with(name, references, "net8.0", None)
    }

    pub fn add_project_with(
        &self,
        name: &str,
        references: &[&str],
        framework: &str,
        output_type: Option<&str>,
    ) -> Result<PathBuf> {
        let items: String = references
            .iter()
            .map(|reference| {
                format!("    <ProjectReference Include=\"..\\{reference}\\{reference}.csproj\" />\n")
            })
            .collect();
        let output_type = output_type
            .map(|value| format!("    <OutputType>{value}</OutputType>\n"))
            .unwrap_or_default();
        let content = format!(
            "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <TargetFramework>{framework}</TargetFramework>\n{output_type}  </PropertyGroup>\n  <ItemGroup>\n{items}  </ItemGroup>\n</Project>\n"
        );
        self.write(&format!("{name}/{name}.csproj"), &content)
    }

    /// Write a raw file under the fixture root.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a solution file listing the given project names (assumed to
    /// live at `<name>/<name>.csproj`) plus a solution folder entry, which
    /// real solutions routinely carry and parsers must skip.
    pub fn add_solution(&self, name: &str, members: &[&str]) -> Result<PathBuf> {
        let mut content =
            String::from("Microsoft Visual Studio Solution File, Format Version 12.00\n");
        for member in members {
            content.push_str(&format!(
                "Project(\"{PROJECT_TYPE_GUID}\") = \"{member}\", \"{member}\\{member}.csproj\", \"{{11111111-2222-3333-4444-555555555555}}\"\nEndProject\n"
            ));
        }
        content.push_str(&format!(
            "Project(\"{FOLDER_TYPE_GUID}\") = \"Solution Items\", \"Solution Items\", \"{{99999999-0000-0000-0000-000000000000}}\"\nEndProject\n"
        ));
        self.write(&format!("{name}.sln"), &content)
    }
}

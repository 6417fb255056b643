//! Workspace Entry Resolver - `.sln` files to member project paths
//!
//! A solution file is line-oriented text; each member is declared as
//!
//! ```text
//! Project("{TYPE-GUID}") = "Name", "Relative\Path\To.csproj", "{PROJECT-GUID}"
//! ```
//!
//! Solution folders use the same line shape with a folder name instead of a
//! `.csproj` path, so the `.csproj` suffix filter is what separates real
//! members from grouping pseudo-entries. A single `.csproj` path is also
//! accepted as the entry point, yielding one entry and no pseudo-node.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::primitives::{Diagnostic, GraphError, ProjectRecord, identity::resolve_reference};

/// Resolved entry points for a graph build
#[derive(Debug)]
pub struct SolutionEntries {
    /// Pseudo-node for the solution file; `None` for a single-project entry
    pub workspace: Option<ProjectRecord>,
    /// Absolute member manifest paths, in declaration order
    pub projects: Vec<PathBuf>,
    /// Members skipped because their file does not exist
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a `.sln` or `.csproj` input path into build entries.
///
/// A missing input is [`GraphError::NotFound`]; any other extension is
/// [`GraphError::UnsupportedInput`]. A solution with zero member projects is
/// not an error - it resolves to an empty entry list so the caller can report
/// "no projects found" instead of a failure.
pub fn resolve_entries(path: &Path) -> Result<SolutionEntries, GraphError> {
    if !path.exists() {
        return Err(GraphError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("sln") => resolve_solution(path),
        Some("csproj") => Ok(SolutionEntries {
            workspace: None,
            projects: vec![absolutize(path)],
            diagnostics: Vec::new(),
        }),
        _ => Err(GraphError::UnsupportedInput {
            path: path.to_path_buf(),
        }),
    }
}

fn resolve_solution(path: &Path) -> Result<SolutionEntries, GraphError> {
    let content = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let solution_dir = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);

    let mut projects = Vec::new();
    let mut diagnostics = Vec::new();

    for line in content.lines() {
        let Some((name, relative_path)) = parse_project_line(line) else {
            continue;
        };
        if !relative_path.to_lowercase().ends_with(".csproj") {
            trace!(entry = name, "skipping solution folder entry");
            continue;
        }

        let resolved = resolve_reference(&solution_dir, relative_path);
        if resolved.exists() {
            projects.push(resolved);
        } else {
            debug!(path = %resolved.display(), "solution member missing on disk");
            diagnostics.push(Diagnostic::MissingProject { path: resolved });
        }
    }

    debug!(
        solution = %path.display(),
        members = projects.len(),
        "resolved solution entries"
    );

    Ok(SolutionEntries {
        workspace: Some(ProjectRecord::workspace(&absolutize(path))),
        projects,
        diagnostics,
    })
}

/// Extract `(name, relative_path)` from a solution project declaration line.
///
/// The line carries four quoted fields: type GUID, display name, relative
/// path, and project GUID. Anything that does not match the shape is ignored.
fn parse_project_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with("Project(") {
        return None;
    }

    let mut fields = trimmed.split('"').skip(1).step_by(2);
    let _type_guid = fields.next()?;
    let name = fields.next()?;
    let relative_path = fields.next()?;
    let _project_guid = fields.next()?;
    Some((name, relative_path))
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

//! Parsed manifest records
//!
//! One [`ProjectRecord`] per manifest file. Display names always derive from
//! the manifest path's file stem, never from manifest-embedded name fields,
//! so two reference spellings that collapse to one identity agree on the
//! name. The stem keeps the path's original casing; only the identity is
//! case-folded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::Identity;

/// Version sentinel for package references declared without a version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Classification of a project's build output
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutputKind {
    Library,
    Executable,
    /// Pseudo-node for a solution file, not an actual buildable project
    Workspace,
    Unknown,
}

impl OutputKind {
    /// Map a manifest `OutputType` value.
    ///
    /// `exe`/`winexe` are executables, any other explicit value is a library,
    /// absence is `Unknown`. Consumers may display `Unknown` as a library;
    /// the record keeps the distinction.
    pub fn from_manifest(value: Option<&str>) -> Self {
        match value {
            None => Self::Unknown,
            Some(text) => match text.trim().to_lowercase().as_str() {
                "exe" | "winexe" => Self::Executable,
                _ => Self::Library,
            },
        }
    }
}

/// A NuGet package declared by a manifest
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version: version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        }
    }
}

/// A declared project-to-project reference
///
/// `path` keeps the resolved absolute path with its original casing for
/// filesystem access; `identity` is the canonical graph key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    pub path: PathBuf,
    pub identity: Identity,
}

impl ProjectReference {
    pub fn resolve(manifest_dir: &Path, raw: &str) -> Self {
        let path = super::identity::resolve_reference(manifest_dir, raw);
        let identity = Identity::canonicalize(&path);
        Self { path, identity }
    }
}

/// One parsed project manifest
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    /// Canonical path, the unique key for graph membership
    pub identity: Identity,
    /// File stem of the manifest path; not guaranteed unique, display only
    pub display_name: String,
    /// Original absolute path, for display and filesystem access
    pub path: PathBuf,
    pub output_kind: OutputKind,
    pub target_frameworks: Vec<String>,
    pub project_references: Vec<ProjectReference>,
    pub package_references: Vec<PackageReference>,
    /// All other recognized scalar manifest properties, keyed by element name
    pub properties: BTreeMap<String, String>,
}

impl ProjectRecord {
    /// Minimal record for a manifest that could not be parsed.
    ///
    /// Carries only path-derived fields so traversal can proceed past it.
    pub fn stub(path: &Path) -> Self {
        let identity = Identity::canonicalize(path);
        let display_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| identity.file_stem().to_string());
        Self {
            display_name,
            identity,
            path: path.to_path_buf(),
            output_kind: OutputKind::Unknown,
            target_frameworks: Vec::new(),
            project_references: Vec::new(),
            package_references: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Pseudo-node representing a solution file itself.
    pub fn workspace(path: &Path) -> Self {
        Self {
            output_kind: OutputKind::Workspace,
            ..Self::stub(path)
        }
    }

    /// Whether this node is a buildable project (not a solution pseudo-node).
    pub fn is_project(&self) -> bool {
        self.output_kind != OutputKind::Workspace
    }
}

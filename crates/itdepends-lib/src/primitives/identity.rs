//! Canonical project identity
//!
//! Manifests reference each other with arbitrary relative spellings, mixed
//! path separators, and (on Windows-authored trees) mixed casing. Graph
//! membership is keyed by one canonical form so that every spelling of the
//! same file collapses to one node. Every component that compares project
//! paths must route through [`Identity::canonicalize`] - never compare raw
//! path strings.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Canonical, comparison-safe form of a project's file path.
///
/// Canonicalization is lexical: the path is absolutized against the current
/// directory, `.` and `..` segments are folded, separators are normalized to
/// `/`, and the result is lowercased. The file does not need to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Produce the canonical identity for a manifest path.
    pub fn canonicalize(path: &Path) -> Self {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        };

        let mut normalized = String::new();
        for component in lexical_components(&absolute) {
            match component {
                Component::Prefix(prefix) => {
                    normalized.push_str(&prefix.as_os_str().to_string_lossy());
                }
                Component::RootDir => normalized.push('/'),
                Component::Normal(segment) => {
                    if !normalized.ends_with('/') && !normalized.is_empty() {
                        normalized.push('/');
                    }
                    normalized.push_str(&segment.to_string_lossy());
                }
                Component::CurDir | Component::ParentDir => {}
            }
        }

        Self(normalized.replace('\\', "/").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File stem of the canonical path, used as the display name.
    pub fn file_stem(&self) -> &str {
        let file_name = self.0.rsplit('/').next().unwrap_or(&self.0);
        file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _)| stem)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fold `.` and `..` segments without touching the filesystem.
fn lexical_components(path: &Path) -> Vec<Component<'_>> {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Leading `..` above the root has nowhere to go; drop it.
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
            other => components.push(other),
        }
    }
    components
}

/// Resolve a manifest-relative reference to an absolute path.
///
/// Reference paths in manifests use `\` separators; they are converted before
/// joining so the result is usable on any platform. The returned path keeps
/// its original casing for filesystem access - only [`Identity`] lowercases.
pub fn resolve_reference(base_dir: &Path, raw: &str) -> PathBuf {
    let relative = raw.replace('\\', "/");
    let joined = base_dir.join(relative);
    let mut resolved = PathBuf::new();
    for component in lexical_components(&joined) {
        resolved.push(component.as_os_str());
    }
    resolved
}

#[cfg(test)]
mod tests {
    include!("identity.test.rs");
}

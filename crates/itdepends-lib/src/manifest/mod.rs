//! Manifest Reader - one `.csproj` file to one [`ProjectRecord`]
//!
//! Pure transform of a single manifest's text; no recursion. The walk is
//! event-driven because PropertyGroup element names are open-ended: every
//! scalar child is captured into the record's `properties` map, while
//! TargetFramework(s), OutputType, ProjectReference, and PackageReference
//! get dedicated handling.
//!
//! Extraction rules are tolerant of absence across the board. Malformed XML
//! is a soft failure: [`read_project_or_stub`] degrades to a path-derived
//! stub record so traversal can proceed past the broken file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use tracing::{trace, warn};

use crate::primitives::{
    Diagnostic, GraphError, OutputKind, PackageReference, ProjectRecord, ProjectReference,
};

/// Property elements that feed dedicated record fields instead of the
/// free-form properties map.
const TARGET_FRAMEWORK: &str = "TargetFramework";
const TARGET_FRAMEWORKS: &str = "TargetFrameworks";
const OUTPUT_TYPE: &str = "OutputType";

/// Parse a single project manifest.
///
/// The file must exist; a missing file is [`GraphError::NotFound`]. Malformed
/// XML is [`GraphError::Xml`] - callers inside the traversal use
/// [`read_project_or_stub`] to degrade that case instead of propagating it.
pub fn read_project(path: &Path) -> Result<ProjectRecord, GraphError> {
    trace!(path = %path.display(), "reading project manifest");

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            GraphError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            GraphError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_manifest(path, &content)
}

/// Parse a manifest, degrading any failure to a stub record plus a
/// [`Diagnostic::ParseFailure`].
///
/// Used for every manifest the traversal discovers: a broken file still
/// yields a node (identity + display name only) so the rest of the graph
/// builds, matching the tolerate-bad-XML behavior of the descriptor format's
/// own tooling.
pub fn read_project_or_stub(path: &Path, diagnostics: &mut Vec<Diagnostic>) -> ProjectRecord {
    match read_project(path) {
        Ok(record) => record,
        Err(error) => {
            warn!(path = %path.display(), %error, "manifest unreadable, keeping stub node");
            diagnostics.push(Diagnostic::ParseFailure {
                path: path.to_path_buf(),
                detail: error.to_string(),
            });
            ProjectRecord::stub(path)
        }
    }
}

fn parse_manifest(path: &Path, content: &str) -> Result<ProjectRecord, GraphError> {
    let manifest_dir = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    let mut reader = Reader::from_str(content);

    // Element name stack; the parent decides how a child is interpreted.
    let mut stack: Vec<String> = Vec::new();
    // Text content arrives fragmented: entity references are separate events,
    // so fragments accumulate here and flush when the element closes.
    let mut text = String::new();
    let mut sdk: Option<String> = None;
    let mut properties: BTreeMap<String, String> = BTreeMap::new();
    let mut project_references: Vec<ProjectReference> = Vec::new();
    let mut package_references: Vec<PackageReference> = Vec::new();
    // PackageReference may carry its version as an attribute or a child
    // element; a started item stays pending until its end tag.
    let mut pending_package: Option<(String, Option<String>)> = None;

    loop {
        match reader.read_event() {
            Err(error) => {
                return Err(GraphError::Xml {
                    path: path.to_path_buf(),
                    detail: error.to_string(),
                });
            }
            Ok(Event::Eof) => break,
            Ok(Event::Start(element)) => {
                let name = element_name(&element);
                if stack.is_empty() && name == "Project" {
                    sdk = attribute(&element, "Sdk");
                }
                if in_item_group(&stack) {
                    match name.as_str() {
                        "ProjectReference" => {
                            if let Some(include) = attribute(&element, "Include") {
                                project_references
                                    .push(ProjectReference::resolve(&manifest_dir, &include));
                            }
                        }
                        "PackageReference" => {
                            if let Some(include) = attribute(&element, "Include") {
                                let version = attribute(&element, "Version");
                                pending_package = Some((include, version));
                            }
                        }
                        _ => {}
                    }
                }
                text.clear();
                stack.push(name);
            }
            Ok(Event::Empty(element)) => {
                text.clear();
                let name = element_name(&element);
                if in_item_group(&stack) {
                    match name.as_str() {
                        "ProjectReference" => {
                            if let Some(include) = attribute(&element, "Include") {
                                project_references
                                    .push(ProjectReference::resolve(&manifest_dir, &include));
                            }
                        }
                        "PackageReference" => {
                            if let Some(include) = attribute(&element, "Include") {
                                let version = attribute(&element, "Version");
                                package_references.push(PackageReference::new(include, version));
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(fragment)) => {
                let decoded = fragment.decode().map_err(|error| GraphError::Xml {
                    path: path.to_path_buf(),
                    detail: error.to_string(),
                })?;
                text.push_str(&decoded);
            }
            Ok(Event::GeneralRef(reference)) => {
                if let Some(resolved) = resolve_entity(&reference) {
                    text.push_str(&resolved);
                }
            }
            Ok(Event::End(_)) => {
                let value = text.trim().to_string();
                text.clear();
                if !value.is_empty() {
                    if in_property_group(&stack) {
                        if let Some(name) = stack.last() {
                            properties.insert(name.clone(), value);
                        }
                    } else if in_pending_package(&stack) {
                        if let Some((_, version @ None)) = pending_package.as_mut() {
                            *version = Some(value);
                        }
                    }
                }
                let closed = stack.pop();
                if closed.as_deref() == Some("PackageReference") {
                    if let Some((name, version)) = pending_package.take() {
                        package_references.push(PackageReference::new(name, version));
                    }
                }
            }
            Ok(_) => {}
        }
    }

    let target_frameworks = extract_target_frameworks(&mut properties);
    let output_kind = OutputKind::from_manifest(properties.get(OUTPUT_TYPE).map(String::as_str));
    if let Some(sdk) = sdk {
        properties.insert("Sdk".to_string(), sdk);
    }

    Ok(ProjectRecord {
        output_kind,
        target_frameworks,
        project_references,
        package_references,
        properties,
        ..ProjectRecord::stub(path)
    })
}

/// Resolve a general reference event: numeric character references plus the
/// five predefined XML entities. Anything else reads as absent.
fn resolve_entity(reference: &BytesRef<'_>) -> Option<String> {
    if let Ok(Some(resolved)) = reference.resolve_char_ref() {
        return Some(resolved.to_string());
    }
    let name = reference.decode().ok()?;
    let resolved = match name.as_ref() {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "apos" => "'",
        "quot" => "\"",
        _ => return None,
    };
    Some(resolved.to_string())
}

/// First non-empty singular `TargetFramework` wins; otherwise the plural
/// `TargetFrameworks` list is split on `;` with empty segments dropped.
/// Both raw values stay visible in the properties map.
fn extract_target_frameworks(properties: &mut BTreeMap<String, String>) -> Vec<String> {
    if let Some(singular) = properties.get(TARGET_FRAMEWORK) {
        let trimmed = singular.trim();
        if !trimmed.is_empty() {
            return vec![trimmed.to_string()];
        }
    }
    properties
        .get(TARGET_FRAMEWORKS)
        .map(|plural| {
            plural
                .split(';')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Look up an attribute by local name. Malformed attributes read as absent;
/// extraction is tolerant of absence everywhere, and truly broken markup
/// fails at the event level instead.
fn attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element.attributes().flatten().find_map(|attr| {
        (attr.key.local_name().as_ref() == name.as_bytes())
            .then(|| attr.unescape_value().ok().map(|value| value.into_owned()))
            .flatten()
    })
}

fn in_property_group(stack: &[String]) -> bool {
    stack.len() >= 2 && stack[stack.len() - 2] == "PropertyGroup"
}

fn in_item_group(stack: &[String]) -> bool {
    stack.last().is_some_and(|name| name == "ItemGroup")
}

fn in_pending_package(stack: &[String]) -> bool {
    stack.len() >= 2
        && stack[stack.len() - 2] == "PackageReference"
        && stack[stack.len() - 1] == "Version"
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

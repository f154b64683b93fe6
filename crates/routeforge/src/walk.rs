//! Route tree traversal
//!
//! Walks the routes directory depth-first, filters candidate files, runs the
//! export classifier over each one, and accumulates routes and imports into
//! an immutable [`ScanResult`]. Traversal is sorted by file name so the scan
//! order, and therefore tie-breaking in the later sort, is deterministic.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::detect::ExportClassifier;
use crate::segment::{self, INDEX_NAME};
use crate::{DiscoveredRoute, GenerateOptions, ModuleImport, Reporter, ScanResult};

/// Recognized source extensions for candidate files.
pub const SOURCE_EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Scans the route tree and returns every discovered route and import.
///
/// Directories are always recursed into. A regular file qualifies when its
/// base name does not start with an uppercase letter, its extension is one
/// of [`SOURCE_EXTENSIONS`], and the classifier finds at least one handler
/// export in its contents. Each discovered route is announced through the
/// reporter as it is found.
pub fn scan_routes(
    options: &GenerateOptions,
    classifier: &dyn ExportClassifier,
    reporter: &mut dyn Reporter,
) -> Result<ScanResult> {
    let routes_dir = options.routes_dir.as_path();
    let output_dir = options
        .output_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut routes = Vec::new();
    let mut imports = Vec::new();

    for entry in WalkDir::new(routes_dir).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("failed to walk {}", routes_dir.display()))?;
        if !entry.file_type().is_file() || !is_candidate(entry.path()) {
            continue;
        }

        let path = entry.path();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let handlers = classifier.classify(&source);
        if handlers.is_empty() {
            // Co-located helper or component file, not a route module.
            continue;
        }

        let relative = path.strip_prefix(routes_dir).unwrap_or(path);
        let stems = stem_components(relative);
        let alias = segment::sanitize_alias(&stems.join("/"));
        let route_path = route_path_from(&stems);

        imports.push(ModuleImport {
            alias: alias.clone(),
            target: import_target(output_dir, path, options.deno),
        });

        for (method, shape) in handlers {
            let route = DiscoveredRoute {
                method,
                path: route_path.clone(),
                alias: alias.clone(),
                shape,
            };
            reporter.route_found(&route);
            routes.push(route);
        }
    }

    Ok(ScanResult { routes, imports })
}

/// A file is a candidate when its name does not start with an uppercase
/// letter and it carries a recognized source extension.
fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.chars().next().is_some_and(|c| c.is_uppercase()) {
        return false;
    }

    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if SOURCE_EXTENSIONS.contains(&ext)
    )
}

/// Splits a relative file path into its extension-stripped components.
fn stem_components(relative: &Path) -> Vec<String> {
    relative
        .with_extension("")
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}

/// Builds the router path for a file's position in the tree.
///
/// Every component goes through the segment transformer; a final component
/// equal to the index name contributes nothing, so `users/index` and `users`
/// derive the same path and the root index derives `/`.
fn route_path_from(stems: &[String]) -> String {
    let fragments: Vec<String> = stems
        .iter()
        .enumerate()
        .filter(|(i, stem)| !(i + 1 == stems.len() && *stem == INDEX_NAME))
        .map(|(_, stem)| segment::transform_segment(stem).fragment())
        .collect();

    format!("/{}", fragments.join("/"))
}

/// Resolves the import target for a source file, relative to the directory
/// containing the output file.
///
/// In deno mode the original extension and a trailing index stem survive;
/// otherwise the extension is dropped and a trailing index stem is stripped.
fn import_target(output_dir: &Path, source_file: &Path, deno: bool) -> String {
    let resolved = if deno {
        relative_to(output_dir, source_file)
    } else {
        relative_to(output_dir, &source_file.with_extension(""))
    };

    let mut target = resolved
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if !deno {
        if let Some(parent) = target.strip_suffix(&format!("/{INDEX_NAME}")) {
            target = parent.to_string();
        } else if target == INDEX_NAME {
            target = ".".to_string();
        }
    }

    if target.starts_with("../") || target.starts_with("./") || target == "." {
        target
    } else {
        format!("./{target}")
    }
}

/// Lexical relative path from one directory to a target, walking up with
/// `..` past the common prefix. No file-system access, mirroring how the
/// generated import will be resolved.
fn relative_to(from_dir: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component);
    }
    relative
}

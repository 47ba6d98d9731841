//! Installed-distribution lookup for the `langgraph` package.
//!
//! Presence is a filesystem check over the interpreter's module search path,
//! never an import: a `langgraph/` package directory (or a single-module
//! `langgraph.py`) on any search-path entry counts as installed. The version
//! comes from the distribution's `.dist-info/METADATA` file; a package that
//! is present but has no readable metadata reports an empty version string,
//! which is distinct from "not installed".

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Distribution name this tool checks for.
pub const PACKAGE_NAME: &str = "langgraph";

/// Result of inspecting the search path for the langgraph distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionStatus {
    /// Whether the package is importable from the search path.
    pub installed: bool,
    /// Declared version from dist-info metadata; empty when unknown.
    pub version: String,
}

/// Inspect a module search path for the langgraph distribution.
pub fn inspect(search_path: &[PathBuf]) -> DistributionStatus {
    let installed = package_present(search_path);
    let version = if installed {
        metadata_version(search_path).unwrap_or_default()
    } else {
        String::new()
    };

    DistributionStatus { installed, version }
}

/// Check whether the package exists on any search-path entry.
fn package_present(search_path: &[PathBuf]) -> bool {
    search_path.iter().any(|dir| {
        dir.join(PACKAGE_NAME).join("__init__.py").is_file()
            || dir.join(format!("{}.py", PACKAGE_NAME)).is_file()
    })
}

/// Read the declared version from the first matching dist-info directory.
fn metadata_version(search_path: &[PathBuf]) -> Option<String> {
    for dir in search_path {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if is_dist_info_for(name, PACKAGE_NAME) {
                if let Some(version) = read_metadata_version(&entry.path()) {
                    return Some(version);
                }
            }
        }
    }
    None
}

/// Match `<package>-<version>.dist-info`, rejecting sibling distributions
/// such as `langgraph_checkpoint-1.0.0.dist-info`.
fn is_dist_info_for(dir_name: &str, package: &str) -> bool {
    dir_name
        .strip_prefix(package)
        .and_then(|rest| rest.strip_prefix('-'))
        .map(|rest| rest.ends_with(".dist-info"))
        .unwrap_or(false)
}

/// Extract the `Version:` field from a METADATA file.
fn read_metadata_version(dist_info: &Path) -> Option<String> {
    let content = fs::read_to_string(dist_info.join("METADATA")).ok()?;
    let pattern = Regex::new(r"(?m)^Version:\s*(\S+)").ok()?;
    pattern
        .captures(&content)
        .map(|caps| caps[1].to_string())
}

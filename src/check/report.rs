//! Environment report construction and serialization.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::check::distribution::DistributionStatus;
use crate::error::Result;

/// The JSON report emitted by `graphdev check`.
///
/// Field names and order are a compatibility contract with tooling that
/// already parses the report; do not rename them.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    /// Full runtime version string, e.g. "3.11.4".
    pub runtime_version: String,
    /// Required minimum version as given, e.g. "3.10".
    pub runtime_required: String,
    /// Whether the runtime meets the requirement.
    pub runtime_ok: bool,
    /// Whether the langgraph package is installed.
    pub langgraph_installed: bool,
    /// Installed langgraph version; empty when unknown.
    pub langgraph_version: String,
    /// Overall verdict: runtime_ok AND langgraph_installed.
    pub ok: bool,
}

impl EnvironmentReport {
    /// Build a report; `ok` is derived, never passed in.
    pub fn new(
        runtime_version: impl Into<String>,
        runtime_required: impl Into<String>,
        runtime_ok: bool,
        distribution: DistributionStatus,
    ) -> Self {
        Self {
            runtime_version: runtime_version.into(),
            runtime_required: runtime_required.into(),
            runtime_ok,
            ok: runtime_ok && distribution.installed,
            langgraph_installed: distribution.installed,
            langgraph_version: distribution.version,
        }
    }

    /// Serialize as pretty JSON: 2-space indent, non-ASCII characters kept
    /// literal, trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(self)?))
    }

    /// Write the JSON body to a file, creating missing parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn report(runtime_ok: bool, installed: bool) -> EnvironmentReport {
        EnvironmentReport::new(
            "3.11.4",
            "3.10",
            runtime_ok,
            DistributionStatus {
                installed,
                version: if installed { "1.0.0".into() } else { String::new() },
            },
        )
    }

    #[test]
    fn ok_requires_both_conditions() {
        assert!(report(true, true).ok);
        assert!(!report(true, false).ok);
        assert!(!report(false, true).ok);
        assert!(!report(false, false).ok);
    }

    #[test]
    fn json_has_fixed_keys_in_order() {
        let json = report(true, true).to_json().unwrap();
        let positions: Vec<usize> = [
            "\"runtime_version\"",
            "\"runtime_required\"",
            "\"runtime_ok\"",
            "\"langgraph_installed\"",
            "\"langgraph_version\"",
            "\"ok\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn json_is_two_space_indented_with_trailing_newline() {
        let json = report(true, true).to_json().unwrap();
        assert!(json.starts_with("{\n  \"runtime_version\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn json_keeps_non_ascii_literal() {
        let r = EnvironmentReport::new(
            "3.11.4 — final",
            "3.10",
            true,
            DistributionStatus::default(),
        );
        assert!(r.to_json().unwrap().contains("—"));
    }

    #[test]
    fn write_to_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep/nested/report.json");

        let r = report(true, true);
        r.write_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, r.to_json().unwrap());
    }

    #[test]
    fn round_trips_through_serde_json_value() {
        let json = report(false, true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["runtime_ok"], false);
        assert_eq!(value["langgraph_installed"], true);
        assert_eq!(value["langgraph_version"], "1.0.0");
        assert_eq!(value["ok"], false);
    }
}

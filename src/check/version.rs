//! Version requirement parsing and comparison.

use regex::Regex;

use crate::error::{GraphdevError, Result};

/// A minimum (major, minor) version requirement parsed from a "X.Y" string.
///
/// Comparison is lexicographic on (major, minor): the major component is
/// compared first and the minor component breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionRequirement {
    pub major: u32,
    pub minor: u32,
}

impl VersionRequirement {
    /// Parse a "MAJOR.MINOR" string.
    ///
    /// The string must contain exactly one separator splitting two integer
    /// components. Anything else ("3", "3.10.1", "a.b") is rejected with
    /// [`GraphdevError::InvalidVersionFormat`].
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || GraphdevError::InvalidVersionFormat {
            value: value.to_string(),
        };

        let (major, minor) = value.split_once('.').ok_or_else(invalid)?;
        let major: u32 = major.parse().map_err(|_| invalid())?;
        let minor: u32 = minor.parse().map_err(|_| invalid())?;

        Ok(Self { major, minor })
    }

    /// Check whether an installed (major, minor) version meets this requirement.
    pub fn is_satisfied_by(self, major: u32, minor: u32) -> bool {
        (major, minor) >= (self.major, self.minor)
    }
}

impl std::fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A runtime version extracted from interpreter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeVersion {
    /// Full version string as reported, e.g. "3.11.4".
    pub full: String,
    pub major: u32,
    pub minor: u32,
}

/// Extract the runtime version from `python --version` output.
///
/// Accepts anything containing an "X.Y" or "X.Y.Z..." token, e.g.
/// "Python 3.11.4". Returns `None` when no version token is present.
pub fn extract_runtime_version(output: &str) -> Option<RuntimeVersion> {
    let pattern = Regex::new(r"(\d+)\.(\d+)((?:\.\d+)*)").ok()?;
    let caps = pattern.captures(output)?;

    let major: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minor: u32 = caps.get(2)?.as_str().parse().ok()?;
    let full = caps.get(0)?.as_str().to_string();

    Some(RuntimeVersion { full, major, minor })
}

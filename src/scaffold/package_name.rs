//! Package name validation.

use regex::Regex;

use crate::error::{GraphdevError, Result};

/// Identifier pattern: a letter or underscore, then letters/digits/underscores.
const NAME_PATTERN: &str = r"^[a-zA-Z_][a-zA-Z0-9_]*$";

/// A validated Python package name.
///
/// Validation happens at construction, before any filesystem interaction,
/// so a bad name can never produce a partial scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    /// Validate a candidate package name.
    pub fn parse(name: &str) -> Result<Self> {
        let pattern = Regex::new(NAME_PATTERN).map_err(anyhow::Error::from)?;
        if pattern.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(GraphdevError::InvalidPackageName {
                name: name.to_string(),
            })
        }
    }

    /// Get the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

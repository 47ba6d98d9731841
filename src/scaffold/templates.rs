//! Scaffold templates embedded at compile time.
//!
//! The template bodies live under `templates/scaffold/` and are embedded
//! into the binary with `include_dir`. Rendering is a single substitution
//! pass replacing the `{{package}}` placeholder, applied to both file
//! contents and destination paths, so the rendered set is a pure function
//! of the package name.

use include_dir::{include_dir, Dir};

use crate::error::Result;
use crate::scaffold::package_name::PackageName;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Placeholder substituted with the package name.
const PLACEHOLDER: &str = "{{package}}";

/// Template source files and their destination paths, in write order.
///
/// The order is part of the conflict-reporting contract: a scaffold run
/// against a non-empty directory fails on the first entry here whose
/// destination already exists.
const FILE_PLAN: &[(&str, &str)] = &[
    ("scaffold/pyproject.toml", "pyproject.toml"),
    ("scaffold/__init__.py", "src/{{package}}/__init__.py"),
    ("scaffold/graph.py", "src/{{package}}/graph.py"),
    ("scaffold/test_graph.py", "tests/test_graph.py"),
    ("scaffold/README.md", "README.md"),
];

/// One rendered scaffold file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Destination path relative to the output directory, forward-slash
    /// separated.
    pub relative_path: String,
    /// Rendered UTF-8 content.
    pub content: String,
}

/// The fixed set of files a scaffold run produces, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFileSet {
    files: Vec<ScaffoldFile>,
}

impl ScaffoldFileSet {
    /// Render the template set for a package name.
    pub fn render(package: &PackageName) -> Result<Self> {
        let mut files = Vec::with_capacity(FILE_PLAN.len());

        for (source, destination) in FILE_PLAN {
            let template = TEMPLATES_DIR
                .get_file(source)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| anyhow::anyhow!("missing embedded template: {source}"))?;

            files.push(ScaffoldFile {
                relative_path: destination.replace(PLACEHOLDER, package.as_str()),
                content: template.replace(PLACEHOLDER, package.as_str()),
            });
        }

        Ok(Self { files })
    }

    /// Rendered files in write order.
    pub fn files(&self) -> &[ScaffoldFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

//! Project scaffolding: template rendering and file writing.
//!
//! - [`package_name`] - identifier validation for the Python package name
//! - [`templates`] - compile-time embedded templates and the rendered file set
//! - [`writer`] - ordered, conflict-aware file writing

pub mod package_name;
pub mod templates;
pub mod writer;

pub use package_name::PackageName;
pub use templates::{ScaffoldFile, ScaffoldFileSet};
pub use writer::write_file_set;

//! graphdev - Developer tooling for LangGraph workflow projects.
//!
//! graphdev bundles two small, stateless developer utilities behind one CLI:
//! an environment checker that verifies the Python runtime and the installed
//! `langgraph` package against minimum requirements, and a scaffolder that
//! writes a minimal LangGraph starter project into a target directory.
//!
//! # Modules
//!
//! - [`check`] - Python runtime and langgraph distribution inspection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`scaffold`] - Project template rendering and file writing
//! - [`ui`] - Terminal output abstraction
//!
//! # Example
//!
//! ```
//! use graphdev::check::VersionRequirement;
//!
//! let req = VersionRequirement::parse("3.10").unwrap();
//! assert!(req.is_satisfied_by(3, 11));
//! assert!(!req.is_satisfied_by(3, 9));
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod scaffold;
pub mod ui;

pub use error::{GraphdevError, Result};
